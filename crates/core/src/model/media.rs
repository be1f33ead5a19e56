use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use super::ValidationError;

/// Reference to a media file served by the backend.
///
/// The backend sends either an absolute URL or a server-relative path
/// (`/media/videos/intro.mp4`). Relative references are resolved against the
/// API base address before they reach the player widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaRef(String);

impl MediaRef {
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyMediaRef` for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyMediaRef);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_absolute(&self) -> bool {
        Url::parse(&self.0).is_ok()
    }

    /// Resolve against `base`, keeping any path prefix the base carries.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnresolvableMediaRef` if the joined URL is invalid.
    pub fn resolve(&self, base: &Url) -> Result<Url, ValidationError> {
        if let Ok(absolute) = Url::parse(&self.0) {
            return Ok(absolute);
        }
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(self.0.trim_start_matches('/'))
            .map_err(|_| ValidationError::UnresolvableMediaRef(self.0.clone()))
    }
}

impl TryFrom<String> for MediaRef {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MediaRef> for String {
    fn from(value: MediaRef) -> Self {
        value.0
    }
}

/// Treat `null`, a missing key and `""` alike: Django file fields serialize
/// an empty upload as an empty string.
pub(crate) fn optional_media<'de, D>(deserializer: D) -> Result<Option<MediaRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| MediaRef::new(value).ok()))
}
