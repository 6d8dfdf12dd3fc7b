mod results;
mod spec;

pub use results::{ElectionResult, ElectionSummary};
pub use spec::{CandidateSpec, DeclareRequest, ElectionSpec};
