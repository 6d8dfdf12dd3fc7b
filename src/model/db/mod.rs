//! DB-compatible (e.g. de/serialisable) types.
//!
//! The types in this module are serialised in an DB-friendly way, e.g.:
//!
//! - IDs and datetimes are serialised in MongoDB's own format.

mod user;
pub use user::{NewUser, User, UserCore};

mod election;
pub use election::{declare_results, DeclarationError, Election, ElectionCore, NewElection};
