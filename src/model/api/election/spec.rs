use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    model::{
        common::election::{Candidate, TIMESTAMP_FORMAT},
        db::NewElection,
        mongodb::Id,
    },
};

use super::super::fields::{required, required_id};

/// An election specification, as submitted by an admin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElectionSpec {
    pub title: Option<String>,
    pub district: Option<String>,
    /// Formatted as [`TIMESTAMP_FORMAT`], interpreted as UTC.
    pub start_time: Option<String>,
    /// Formatted as [`TIMESTAMP_FORMAT`], interpreted as UTC.
    pub end_time: Option<String>,
}

impl TryFrom<ElectionSpec> for NewElection {
    type Error = Error;

    /// Validate the spec and build a fresh, ongoing election from it.
    fn try_from(spec: ElectionSpec) -> Result<Self> {
        let title = required(&spec.title, "Title")?;
        let district = required(&spec.district, "District")?;
        let start_time = parse_timestamp(&spec.start_time, "start_time")?;
        let end_time = parse_timestamp(&spec.end_time, "end_time")?;
        if end_time <= start_time {
            return Err(Error::Validation(
                "end_time must be after start_time".to_string(),
            ));
        }
        Ok(NewElection::new(
            title.to_string(),
            district.to_string(),
            start_time,
            end_time,
        ))
    }
}

fn parse_timestamp(value: &Option<String>, field: &str) -> Result<DateTime<Utc>> {
    let text = required(value, field)?;
    let naive = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|_| {
        Error::Validation(format!(
            "Malformed {field} '{text}', expected YYYY-MM-DDTHH:MM"
        ))
    })?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// A candidate to add to an existing election.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateSpec {
    pub election_id: Option<String>,
    pub name: Option<String>,
    pub party: Option<String>,
}

impl CandidateSpec {
    /// Validate the spec, giving the target election and the new candidate.
    pub fn validate(&self) -> Result<(Id, Candidate)> {
        let election_id = required_id(&self.election_id, "Election ID")?;
        let name = required(&self.name, "Candidate name")?;
        let party = required(&self.party, "Party")?;
        Ok((election_id, Candidate::new(name, party)))
    }
}

/// Names the election whose results should be declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclareRequest {
    pub election_id: Option<String>,
}

impl DeclareRequest {
    pub fn election_id(&self) -> Result<Id> {
        required_id(&self.election_id, "Election ID")
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl ElectionSpec {
        pub fn example() -> Self {
            Self {
                title: Some("Municipal Council 2025".to_string()),
                district: Some("Riverside".to_string()),
                start_time: Some("2025-02-27T09:00".to_string()),
                end_time: Some("2025-02-27T19:00".to_string()),
            }
        }
    }

    impl CandidateSpec {
        pub fn example(election_id: Id) -> Self {
            Self {
                election_id: Some(election_id.to_string()),
                name: Some("Asha Verma".to_string()),
                party: Some("Green".to_string()),
            }
        }
    }
}
