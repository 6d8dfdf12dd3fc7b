mod base;
mod declare;

pub use base::{Election, ElectionCore, NewElection};
pub use declare::{declare_results, DeclarationError};
