mod claims;
mod token;

pub use claims::{Claims, Role};
pub use token::{AdminToken, AuthError, AUTHORIZATION_HEADER};
