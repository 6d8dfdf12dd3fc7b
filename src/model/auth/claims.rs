use std::fmt::Display;

use chrono::{serde::ts_seconds, DateTime, Utc};
use jsonwebtoken::{
    errors::{Error as JwtError, ErrorKind as JwtErrorKind},
    Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::Config;

use super::AuthError;

/// Different privilege levels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Voter,
    Admin,
}

impl Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::Voter => "voter",
                Self::Admin => "admin",
            }
        )
    }
}

/// The claim set carried by a signed bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Who the token was issued to.
    pub sub: String,
    pub role: Role,
    #[serde(rename = "exp", with = "ts_seconds")]
    pub expire_at: DateTime<Utc>,
}

impl Claims {
    /// Claims for the configured administrator, expiring after the configured TTL.
    pub fn admin(email: &str, config: &Config) -> Self {
        Self {
            sub: email.to_string(),
            role: Role::Admin,
            expire_at: Utc::now() + config.auth_ttl(),
        }
    }

    /// Does this token permit the given role?
    pub fn permits(&self, target: Role) -> bool {
        self.role == target
    }

    /// Sign these claims into a token string.
    pub fn encode(&self, secret: &[u8]) -> Result<String, JwtError> {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(secret),
        )
    }

    /// Verify a token string and extract its claims.
    pub fn decode(token: &str, secret: &[u8]) -> Result<Self, AuthError> {
        jsonwebtoken::decode::<Self>(
            token,
            &DecodingKey::from_secret(secret),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|err| match err.into_kind() {
            JwtErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Invalid,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const SECRET: &[u8] = b"claims-test-secret";

    fn voter_claims() -> Claims {
        Claims {
            sub: "64b7f0c2a1e5d3f4b6c8a9e0".to_string(),
            role: Role::Voter,
            expire_at: Utc::now() + Duration::minutes(5),
        }
    }

    #[test]
    fn round_trip_preserves_role() {
        let claims = voter_claims();
        let token = claims.encode(SECRET).unwrap();
        let decoded = Claims::decode(&token, SECRET).unwrap();
        assert_eq!(decoded.role, Role::Voter);
        assert_eq!(decoded.sub, claims.sub);
        assert!(!decoded.permits(Role::Admin));
    }

    #[test]
    fn admin_claims_use_configured_ttl() {
        let config = Config::example();
        let claims = Claims::admin("returning.officer@example.com", &config);
        assert!(claims.permits(Role::Admin));
        let ttl = claims.expire_at - Utc::now();
        assert!(ttl > Duration::minutes(59) && ttl <= Duration::hours(1));
    }

    #[test]
    fn expired_tokens_are_distinguished() {
        let mut claims = voter_claims();
        // Well past the default validation leeway.
        claims.expire_at = Utc::now() - Duration::hours(1);
        let token = claims.encode(SECRET).unwrap();
        assert_eq!(Claims::decode(&token, SECRET), Err(AuthError::Expired));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let token = voter_claims().encode(SECRET).unwrap();
        assert_eq!(
            Claims::decode(&token, b"some-other-secret"),
            Err(AuthError::Invalid)
        );
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(Claims::decode("not.a.jwt", SECRET), Err(AuthError::Invalid));
        assert_eq!(Claims::decode("", SECRET), Err(AuthError::Invalid));
    }

    #[test]
    fn unknown_role_is_invalid() {
        #[derive(Serialize)]
        struct Foreign {
            sub: String,
            role: String,
            exp: i64,
        }
        let foreign = Foreign {
            sub: "someone".to_string(),
            role: "superuser".to_string(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &foreign,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert_eq!(Claims::decode(&token, SECRET), Err(AuthError::Invalid));
    }
}
