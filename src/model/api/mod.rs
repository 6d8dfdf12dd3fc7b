//! API-compatible (e.g. de/serialisable) types.
//!
//! The types in this module are serialised in an API-friendly way, e.g.:
//!
//! - IDs are serialised as hex strings under `_id`.
//! - Request fields are all optional at the serde level and checked by hand,
//!   so a missing field gets a specific 400 rather than a generic 422.

mod admin;
mod election;
mod fields;
mod id;
mod response;
mod voter;

pub use admin::{AdminCredentials, IssuedToken};
pub use election::{CandidateSpec, DeclareRequest, ElectionResult, ElectionSpec, ElectionSummary};
pub use id::ApiId;
pub use response::{Created, Declared, ElectionList, Message, PendingVoterList, ResultList};
pub use voter::{PendingVoter, VoterEmailRequest, VoterIdRequest};
