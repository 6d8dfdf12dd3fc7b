use std::ops::Deref;

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::model::{
    common::election::{Candidate, ElectionStatus},
    mongodb::Id,
};

/// Core election data, as stored in the database.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ElectionCore {
    pub title: String,
    pub district: String,
    /// Candidates in the order they were added.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub end_time: DateTime<Utc>,
    pub status: ElectionStatus,
    /// Set exactly once, when results are declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Candidate>,
}

impl ElectionCore {
    /// A fresh election: no candidates, no winner, still ongoing.
    pub fn new(
        title: String,
        district: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            district,
            candidates: Vec::new(),
            start_time,
            end_time,
            status: ElectionStatus::Ongoing,
            winner: None,
        }
    }
}

/// An election without an ID.
pub type NewElection = ElectionCore;

/// An election from the database, with its unique ID.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Election {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub election: ElectionCore,
}

impl Deref for Election {
    type Target = ElectionCore;

    fn deref(&self) -> &Self::Target {
        &self.election
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use chrono::{Duration, TimeZone};

    use super::*;

    impl ElectionCore {
        pub fn example() -> Self {
            let start_time = Utc.with_ymd_and_hms(2025, 2, 27, 9, 0, 0).unwrap();
            Self::new(
                "Municipal Council 2025".to_string(),
                "Riverside".to_string(),
                start_time,
                start_time + Duration::hours(10),
            )
        }

        pub fn contested_example() -> Self {
            let mut election = Self::example();
            election.candidates = vec![
                Candidate {
                    name: "Asha Verma".to_string(),
                    party: "Green".to_string(),
                    votes: 120,
                },
                Candidate {
                    name: "Bilal Khan".to_string(),
                    party: "Blue".to_string(),
                    votes: 245,
                },
                Candidate {
                    name: "Chen Wei".to_string(),
                    party: "Red".to_string(),
                    votes: 245,
                },
            ];
            election
        }

        pub fn completed_example() -> Self {
            let mut election = Self::contested_example();
            election.title = "Regional Assembly 2024".to_string();
            election.status = ElectionStatus::Completed;
            election.winner = election.candidates.get(1).cloned();
            election
        }
    }
}
