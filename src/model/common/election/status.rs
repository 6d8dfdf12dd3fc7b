use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// States in the election lifecycle. Transitions only ever go
/// `Ongoing -> Completed`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    /// Accepting candidates and votes.
    Ongoing,
    /// Results declared; votes and winner are fixed.
    Completed,
}

impl ElectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

impl From<ElectionStatus> for Bson {
    fn from(status: ElectionStatus) -> Self {
        Bson::String(status.as_str().to_string())
    }
}
