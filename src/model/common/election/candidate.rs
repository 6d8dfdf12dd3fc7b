use std::fmt::Formatter;

use serde::{
    de::{Error as DeError, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// A candidate standing in an election, embedded in the election record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub party: String,
    /// Incremented by the voting routes; records written before counting
    /// started may lack the field entirely.
    #[serde(default, deserialize_with = "lenient_votes")]
    pub votes: u32,
}

impl Candidate {
    /// A candidate with no votes yet.
    pub fn new(name: impl Into<String>, party: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            party: party.into(),
            votes: 0,
        }
    }
}

/// Read a stored vote count of any numeric type. `null` and negative counts
/// read as 0; counts beyond `u32::MAX` saturate.
fn lenient_votes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct VotesVisitor;

    impl<'de> Visitor<'de> for VotesVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            write!(formatter, "a vote count")
        }

        fn visit_i64<E: DeError>(self, v: i64) -> Result<u32, E> {
            Ok(u32::try_from(v.max(0)).unwrap_or(u32::MAX))
        }

        fn visit_u64<E: DeError>(self, v: u64) -> Result<u32, E> {
            Ok(u32::try_from(v).unwrap_or(u32::MAX))
        }

        fn visit_f64<E: DeError>(self, v: f64) -> Result<u32, E> {
            // `as` saturates, and maps NaN to 0.
            Ok(v.round() as u32)
        }

        fn visit_unit<E: DeError>(self) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_none<E: DeError>(self) -> Result<u32, E> {
            Ok(0)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<u32, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(VotesVisitor)
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, from_document, Bson};
    use rocket::serde::json::serde_json;

    use super::*;

    fn votes_from(votes: Bson) -> u32 {
        let raw = doc! { "name": "Ines Duarte", "party": "Blue", "votes": votes };
        from_document::<Candidate>(raw).unwrap().votes
    }

    #[test]
    fn stored_counts_of_any_numeric_type() {
        assert_eq!(votes_from(Bson::Int32(31)), 31);
        assert_eq!(votes_from(Bson::Int64(4_000)), 4_000);
        assert_eq!(votes_from(Bson::Double(12.0)), 12);
        assert_eq!(votes_from(Bson::Int64(i64::MAX)), u32::MAX);
    }

    #[test]
    fn null_and_negative_counts_read_as_zero() {
        assert_eq!(votes_from(Bson::Null), 0);
        assert_eq!(votes_from(Bson::Int32(-3)), 0);
        assert_eq!(votes_from(Bson::Double(-1.5)), 0);
    }

    #[test]
    fn missing_count_reads_as_zero() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"name": "Kwame Mensah", "party": "Green"}"#).unwrap();
        assert_eq!(candidate.votes, 0);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let raw = doc! { "name": "Ines Duarte", "party": "Blue", "votes": "many" };
        assert!(from_document::<Candidate>(raw).is_err());
    }
}
