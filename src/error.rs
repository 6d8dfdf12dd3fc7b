use jsonwebtoken::errors::Error as JwtError;
use mongodb::{bson::ser::Error as BsonError, error::Error as DbError};
use rocket::{
    http::{Status, StatusClass},
    response::{self, status, Responder},
    serde::json::{serde_json::json, Json},
    Request,
};
use thiserror::Error;

use crate::{
    logging::RequestId,
    model::db::DeclarationError,
    Config,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error(transparent)]
    Bson(#[from] BsonError),
    #[error(transparent)]
    Jwt(#[from] JwtError),
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid credentials")]
    Credentials,
}

impl Error {
    /// A [`Error::NotFound`] for the named thing.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", what.into()))
    }

    /// The HTTP status this error is reported with.
    pub fn status(&self) -> Status {
        match self {
            Self::Db(_) | Self::Bson(_) | Self::Jwt(_) => Status::InternalServerError,
            Self::Declaration(_) | Self::Validation(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Credentials => Status::Unauthorized,
        }
    }

    /// Render the JSON body for this error.
    ///
    /// Declaration failures carry only an `error` field, so clients can tell
    /// success apart by the presence of `message`. Server faults only carry
    /// diagnostic detail when `expose_details` is set.
    fn body(&self, expose_details: bool) -> rocket::serde::json::Value {
        match self {
            Self::Declaration(e) => json!({ "error": e.to_string() }),
            Self::Db(_) | Self::Bson(_) | Self::Jwt(_) => {
                if expose_details {
                    json!({ "message": "Internal server error", "error": self.to_string() })
                } else {
                    json!({ "message": "Internal server error" })
                }
            }
            _ => json!({ "message": self.to_string() }),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let id = RequestId::of(req);
        let status = self.status();
        if status.class() == StatusClass::ServerError {
            error!("rsp{id}: {self}");
        } else {
            warn!("rsp{id}: {self}");
        }

        let expose_details = req
            .rocket()
            .state::<Config>()
            .map_or(false, Config::expose_error_details);
        status::Custom(status, Json(self.body(expose_details))).respond_to(req)
    }
}
