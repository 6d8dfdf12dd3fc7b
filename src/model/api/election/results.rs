use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use crate::model::{api::ApiId, common::election::Candidate};

/// The admin listing view of an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSummary {
    #[serde(rename = "_id")]
    pub id: ApiId,
    pub title: String,
    pub district: String,
}

impl ElectionSummary {
    /// The fields to fetch from the store.
    pub fn projection() -> Document {
        doc! { "_id": 1, "title": 1, "district": 1 }
    }
}

/// The public view of a completed election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionResult {
    #[serde(rename = "_id")]
    pub id: ApiId,
    pub title: String,
    pub district: String,
    /// Every candidate carries a vote count; a missing upstream count reads as 0.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub winner: Option<Candidate>,
}

impl ElectionResult {
    /// The fields to fetch from the store.
    pub fn projection() -> Document {
        doc! { "_id": 1, "title": 1, "district": 1, "candidates": 1, "winner": 1 }
    }
}
