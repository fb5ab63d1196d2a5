use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User identity, assigned by the store on creation and never reused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Zero until the store assigns an identity
    pub id: UserId,

    pub email: String,

    /// Non-empty, no whitespace
    pub login: String,

    /// Display name, defaults to the login when blank
    pub name: String,

    pub birthday: NaiveDate,

    /// Friends of this user.
    /// Owned by the relationship index; filled in on reads only.
    pub friends: BTreeSet<UserId>,
}

impl User {
    /// Create a user that has not been stored yet
    pub fn new(email: String, login: String, name: Option<String>, birthday: NaiveDate) -> Self {
        Self {
            id: UserId::default(),
            email,
            login,
            name: name.unwrap_or_default(),
            birthday,
            friends: BTreeSet::new(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.login)
    }
}
