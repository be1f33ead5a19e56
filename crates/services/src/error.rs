//! Shared error types for the services crate.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use campus_core::model::{CourseId, ValidationError};

/// Errors from building or using `ApiConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base address: {raw}")]
    InvalidBaseAddress { raw: String },
    #[error("invalid API path: {path}")]
    InvalidPath { path: String },
}

/// The request never produced a response (DNS, refused connection, TLS, timeout).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("request never reached the server: {0}")]
pub struct NetworkError(pub String);

/// Errors emitted by `TransportClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("request failed with status {status}")]
    Http { status: StatusCode, payload: Value },
    #[error("response body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TransportError {
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Human-readable message the backend put in the error body, if any.
    ///
    /// The login endpoint answers `{"message": ...}`; framework errors use
    /// `{"detail": ...}`.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        let Self::Http { payload, .. } = self else {
            return None;
        };
        payload
            .get("message")
            .or_else(|| payload.get("detail"))
            .and_then(Value::as_str)
            .or_else(|| payload.as_str())
            .filter(|message| !message.trim().is_empty())
    }
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Login was refused; `message` is what the backend said.
    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: TransportError,
    },
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl CatalogError {
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            Self::CourseNotFound(_) => None,
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
