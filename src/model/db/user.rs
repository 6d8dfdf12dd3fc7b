use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::model::mongodb::Id;

/// Core user data, as stored in the database.
///
/// Registration (and any extra fields it stores) happens elsewhere; this
/// service only ever reads these fields and flips `is_approved`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct UserCore {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_approved: bool,
}

/// A user without an ID.
pub type NewUser = UserCore;

/// A user from the database, with its unique ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub user: UserCore,
}

impl Deref for User {
    type Target = UserCore;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}
