use serde::Serialize;

use super::ValidationError;

/// Phone number used as the login identifier.
///
/// Only presence is checked here; whether the number is registered (and
/// paid up) is the backend's call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPhone` when nothing but whitespace was entered.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
