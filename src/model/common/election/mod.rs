mod candidate;
mod status;
mod tally;

pub use candidate::Candidate;
pub use status::ElectionStatus;
pub use tally::select_winner;

/// Textual format of election start and end times, e.g. `2025-02-27T21:51`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";
