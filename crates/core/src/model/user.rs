use serde::{Deserialize, Serialize};

use super::course::ClassLevel;
use super::ids::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Mentor,
    Admin,
}

/// Account record returned by `POST /api/auth/login/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub class_level: Option<ClassLevel>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub payment_status: bool,
}

impl User {
    /// Name for greetings; falls back to the phone number for unnamed accounts.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.phone
        } else {
            &self.name
        }
    }
}

/// The authenticated identity of the current user.
///
/// The cookie that actually authenticates requests lives in the HTTP client;
/// this is what the UI knows about who is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    #[must_use]
    pub fn new(user: User) -> Self {
        Self { user }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }
}
