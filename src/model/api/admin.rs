use serde::{Deserialize, Serialize};

/// Raw admin credentials, received from a user. These are never stored or logged.
#[derive(Clone, Deserialize, Serialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

/// A freshly signed bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
}
