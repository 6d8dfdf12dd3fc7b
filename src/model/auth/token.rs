use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};
use thiserror::Error;

use crate::Config;

use super::{Claims, Role};

pub const AUTHORIZATION_HEADER: &str = "Authorization";
const BEARER_PREFIX: &str = "Bearer ";

/// Reasons the authorization gate turns a request away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Token missing")]
    Missing,
    #[error("Token expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Unauthorized")]
    Unauthorized,
}

/// Proof that the request carried a valid administrator token.
///
/// Taking this as the first guard of a route makes the route admin-only.
/// On failure the request is answered with 403, and the [`AuthError`] is left
/// in the request-local cache for the catcher to report.
#[derive(Debug)]
pub struct AdminToken {
    pub claims: Claims,
}

impl AdminToken {
    /// Run the gate over a raw `Authorization` header value.
    pub fn authorize(header: Option<&str>, config: &Config) -> Result<Self, AuthError> {
        let header = header.map(str::trim).filter(|h| !h.is_empty());
        let token = header.ok_or(AuthError::Missing)?;
        let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token).trim();

        let claims = Claims::decode(token, config.jwt_secret())?;
        if !claims.permits(Role::Admin) {
            return Err(AuthError::Unauthorized);
        }
        Ok(Self { claims })
    }

    /// The gate's verdict on this request, if it ran.
    pub fn rejection(req: &Request<'_>) -> Option<AuthError> {
        *req.local_cache(|| None::<AuthError>)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminToken {
    type Error = AuthError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let config = match req.rocket().state::<Config>() {
            Some(config) => config,
            None => {
                error!("No config in managed state; refusing {}", req.uri());
                return Outcome::Failure((Status::Forbidden, AuthError::Invalid));
            }
        };

        match Self::authorize(req.headers().get_one(AUTHORIZATION_HEADER), config) {
            Ok(token) => {
                debug!("Admin {} passed the gate", token.claims.sub);
                Outcome::Success(token)
            }
            Err(err) => {
                req.local_cache(|| Some(err));
                Outcome::Failure((Status::Forbidden, err))
            }
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use chrono::{Duration, Utc};
    use rocket::http::Header;

    use super::*;
    use crate::config::EXAMPLE_ADMIN_EMAIL;

    impl AdminToken {
        /// A bearer header for the example administrator.
        pub fn example_header() -> Header<'static> {
            let config = Config::example();
            let token = Claims::admin(EXAMPLE_ADMIN_EMAIL, &config)
                .encode(config.jwt_secret())
                .unwrap();
            Header::new(AUTHORIZATION_HEADER, format!("{BEARER_PREFIX}{token}"))
        }

        /// A correctly signed header for a voter.
        pub fn example_voter_header() -> Header<'static> {
            let config = Config::example();
            let claims = Claims {
                sub: "64b7f0c2a1e5d3f4b6c8a9e0".to_string(),
                role: Role::Voter,
                expire_at: Utc::now() + Duration::minutes(10),
            };
            let token = claims.encode(config.jwt_secret()).unwrap();
            Header::new(AUTHORIZATION_HEADER, format!("{BEARER_PREFIX}{token}"))
        }

        /// A correctly signed admin header that expired an hour ago.
        pub fn example_expired_header() -> Header<'static> {
            let config = Config::example();
            let mut claims = Claims::admin(EXAMPLE_ADMIN_EMAIL, &config);
            claims.expire_at = Utc::now() - Duration::hours(1);
            let token = claims.encode(config.jwt_secret()).unwrap();
            Header::new(AUTHORIZATION_HEADER, format!("{BEARER_PREFIX}{token}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::Header,
        local::asynchronous::Client,
        serde::json::{serde_json::json, Value},
    };

    use super::*;

    #[get("/gated")]
    fn gated(token: AdminToken) -> String {
        token.claims.sub
    }

    async fn client() -> Client {
        let rocket = rocket::build()
            .manage(Config::example())
            .mount("/", routes![gated])
            .register("/", crate::api::catchers());
        Client::tracked(rocket).await.unwrap()
    }

    async fn assert_forbidden(client: &Client, header: Option<Header<'static>>, message: &str) {
        let mut request = client.get("/gated");
        if let Some(header) = header {
            request = request.header(header);
        }
        let response = request.dispatch().await;
        assert_eq!(response.status(), Status::Forbidden);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body, json!({ "message": message }));
    }

    #[test]
    fn bearer_prefix_is_optional() {
        let config = Config::example();
        let token = Claims::admin("a@example.com", &config)
            .encode(config.jwt_secret())
            .unwrap();
        assert!(AdminToken::authorize(Some(&token), &config).is_ok());
        assert!(AdminToken::authorize(Some(&format!("Bearer {token}")), &config).is_ok());
    }

    #[test]
    fn blank_header_counts_as_missing() {
        let config = Config::example();
        assert_eq!(
            AdminToken::authorize(None, &config).unwrap_err(),
            AuthError::Missing
        );
        assert_eq!(
            AdminToken::authorize(Some("   "), &config).unwrap_err(),
            AuthError::Missing
        );
        assert_eq!(
            AdminToken::authorize(Some("Bearer "), &config).unwrap_err(),
            AuthError::Invalid
        );
    }

    #[rocket::async_test]
    async fn admin_passes_gate() {
        let client = client().await;
        let response = client
            .get("/gated")
            .header(AdminToken::example_header())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_string().await.unwrap(),
            crate::config::EXAMPLE_ADMIN_EMAIL
        );
    }

    #[rocket::async_test]
    async fn missing_token() {
        assert_forbidden(&client().await, None, "Token missing").await;
    }

    #[rocket::async_test]
    async fn expired_token() {
        let header = AdminToken::example_expired_header();
        assert_forbidden(&client().await, Some(header), "Token expired").await;
    }

    #[rocket::async_test]
    async fn invalid_token() {
        let header = Header::new(AUTHORIZATION_HEADER, "Bearer not.a.token");
        assert_forbidden(&client().await, Some(header), "Invalid token").await;
    }

    #[rocket::async_test]
    async fn voter_is_unauthorized() {
        let header = AdminToken::example_voter_header();
        assert_forbidden(&client().await, Some(header), "Unauthorized").await;
    }
}
