use std::env;

use campus_core::model::MediaRef;
use url::Url;

use crate::error::ConfigError;

pub const API_URL_ENV: &str = "CAMPUS_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Fixed configuration of the transport client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_address: Url,
    /// Keep and send the backend's session cookie.
    pub with_credentials: bool,
    pub default_content_type: &'static str,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_address: Url) -> Self {
        Self {
            base_address,
            with_credentials: true,
            default_content_type: JSON_CONTENT_TYPE,
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseAddress` unless `raw` is an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidBaseAddress {
            raw: raw.to_string(),
        };
        let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(Self::new(url))
    }

    /// Read `CAMPUS_API_URL`, defaulting to the local development backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseAddress` if the variable is set to garbage.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(env::var(API_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::parse(&raw),
            _ => Self::parse(DEFAULT_API_URL),
        }
    }

    #[must_use]
    pub fn without_credentials(mut self) -> Self {
        self.with_credentials = false;
        self
    }

    /// Absolute URL of an API path such as `/api/topics/42/`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` if the path cannot be joined onto the base.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        let mut base = self.base_address.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|_| ConfigError::InvalidPath {
                path: path.to_string(),
            })
    }

    /// Absolute URL of a media file, if it can be resolved.
    #[must_use]
    pub fn resolve_media(&self, media: &MediaRef) -> Option<Url> {
        match media.resolve(&self.base_address) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(media = media.as_str(), error = %err, "unresolvable media reference");
                None
            }
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_API_URL).expect("default API address should be valid"))
    }
}
