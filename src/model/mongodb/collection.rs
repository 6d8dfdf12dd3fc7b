use std::ops::Deref;

use mongodb::{
    bson::doc, error::Error as DbError, options::IndexOptions, Collection, Database, IndexModel,
};
use rocket::{
    http::Status,
    request::{self, FromRequest, Request},
};

use crate::model::{
    api::{ElectionResult, ElectionSummary, PendingVoter},
    db::{Election, NewElection, NewUser, User},
};

/// A type that can be directly inserted/read to/from the database.
pub trait MongoCollection {
    /// The name of the collection.
    const NAME: &'static str;
}

/// A database collection of the given type.
pub struct Coll<T>(Collection<T>);

impl<T> Coll<T>
where
    T: MongoCollection,
{
    /// Get a handle on this collection in the given database.
    pub fn from_db(db: &Database) -> Self {
        Self(db.collection(T::NAME))
    }
}

// `Derive(Clone)` would only derive if `T: Clone`, but we don't need that bound.
impl<T> Clone for Coll<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Deref for Coll<T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r, T> FromRequest<'r> for Coll<T>
where
    T: MongoCollection,
{
    type Error = ();

    /// Get the database connection from the managed state and wrap it in a collection.
    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match req.rocket().state::<Database>() {
            Some(db) => request::Outcome::Success(Coll::from_db(db)),
            None => {
                error!("No database in managed state; cannot serve {}", req.uri());
                request::Outcome::Failure((Status::InternalServerError, ()))
            }
        }
    }
}

// User collections
const USERS: &str = "users";
impl MongoCollection for User {
    const NAME: &'static str = USERS;
}
impl MongoCollection for NewUser {
    const NAME: &'static str = USERS;
}
impl MongoCollection for PendingVoter {
    const NAME: &'static str = USERS;
}

// Election collections
const ELECTIONS: &str = "elections";
impl MongoCollection for Election {
    const NAME: &'static str = ELECTIONS;
}
impl MongoCollection for NewElection {
    const NAME: &'static str = ELECTIONS;
}
impl MongoCollection for ElectionSummary {
    const NAME: &'static str = ELECTIONS;
}
impl MongoCollection for ElectionResult {
    const NAME: &'static str = ELECTIONS;
}

/// Ensure that all the required indexes exist on the given database.
///
/// This operation is idempotent.
pub async fn ensure_indexes_exist(db: &Database) -> Result<(), DbError> {
    debug!("Ensuring collection indexes exist");

    // User collection: one account per email.
    let unique = IndexOptions::builder().unique(true).build();
    let email_index = IndexModel::builder()
        .keys(doc! {"email": 1})
        .options(unique)
        .build();
    let approval_index = IndexModel::builder().keys(doc! {"is_approved": 1}).build();
    Coll::<User>::from_db(db)
        .create_indexes([email_index, approval_index], None)
        .await?;

    // Election collection.
    let status_index = IndexModel::builder().keys(doc! {"status": 1}).build();
    Coll::<Election>::from_db(db)
        .create_index(status_index, None)
        .await?;

    Ok(())
}
