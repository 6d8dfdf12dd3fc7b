use serde::{Deserialize, Serialize};

use crate::model::common::election::Candidate;

use super::{ApiId, ElectionResult, ElectionSummary, PendingVoter};

/// A plain acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement of a newly created record.
#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub message: String,
    #[serde(rename = "_id")]
    pub id: ApiId,
}

/// A successful results declaration.
#[derive(Debug, Clone, Serialize)]
pub struct Declared {
    pub message: String,
    pub winner: Candidate,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElectionList {
    pub elections: Vec<ElectionSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingVoterList {
    #[serde(rename = "pendingVoters")]
    pub pending_voters: Vec<PendingVoter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultList {
    pub results: Vec<ElectionResult>,
}
