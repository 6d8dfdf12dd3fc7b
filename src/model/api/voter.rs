use serde::{Deserialize, Serialize};

use crate::{error::Result, model::mongodb::Id};

use super::{
    fields::{required, required_id},
    ApiId,
};

/// Identifies a voter by record ID. This is the canonical form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoterIdRequest {
    #[serde(rename = "voterId")]
    pub voter_id: Option<String>,
}

impl VoterIdRequest {
    pub fn voter_id(&self) -> Result<Id> {
        required_id(&self.voter_id, "Voter ID")
    }
}

/// Identifies a voter by email address.
///
/// Deprecated: kept for older frontends; prefer [`VoterIdRequest`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoterEmailRequest {
    pub email: Option<String>,
}

impl VoterEmailRequest {
    pub fn email(&self) -> Result<&str> {
        required(&self.email, "Email")
    }
}

/// A voter awaiting approval, as listed to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVoter {
    #[serde(rename = "_id")]
    pub id: ApiId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::*;

    #[test]
    fn voter_id_uses_frontend_field_name() {
        let request: VoterIdRequest =
            serde_json::from_str(r#"{"voterId": "64b7f0c2a1e5d3f4b6c8a9e0"}"#).unwrap();
        assert_eq!(
            request.voter_id().unwrap().to_string(),
            "64b7f0c2a1e5d3f4b6c8a9e0"
        );

        let empty: VoterIdRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.voter_id().is_err());
    }

    #[test]
    fn email_is_trimmed() {
        let request = VoterEmailRequest {
            email: Some(" priya.raman@example.com ".to_string()),
        };
        assert_eq!(request.email().unwrap(), "priya.raman@example.com");
    }
}
