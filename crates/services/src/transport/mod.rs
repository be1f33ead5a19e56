//! The single outbound path to the backend.
//!
//! `TransportClient` owns the base address, content type and the global
//! response interceptor. The wire itself sits behind [`HttpBackend`] so the
//! interceptor can be exercised without a server.

mod reqwest_backend;
mod stub;

pub use reqwest_backend::ReqwestBackend;
pub use stub::StubBackend;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{NetworkError, TransportError};

/// A fully resolved request, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
    pub content_type: &'static str,
    pub with_credentials: bool,
}

/// Raw response: status plus the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send one request. Any response, whatever its status, is `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, NetworkError>;
}

/// Invoked by the transport for every 401 response, once per failing call.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}

#[derive(Clone)]
pub struct TransportClient {
    config: ApiConfig,
    backend: Arc<dyn HttpBackend>,
    unauthorized: Option<Arc<dyn UnauthorizedHandler>>,
}

impl TransportClient {
    #[must_use]
    pub fn new(config: ApiConfig, backend: Arc<dyn HttpBackend>) -> Self {
        Self {
            config,
            backend,
            unauthorized: None,
        }
    }

    #[must_use]
    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.unauthorized = Some(handler);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a request and return the parsed body of a 2xx response.
    ///
    /// An empty 2xx body parses as `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Http` for non-2xx statuses (after the
    /// interceptor ran), `Network` when nothing came back and `Decode` for a
    /// 2xx body that is not JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let response = self.execute(method, path, body).await?;
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// # Errors
    ///
    /// See [`TransportClient::request`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let value = self.request(Method::GET, path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// # Errors
    ///
    /// See [`TransportClient::request`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let value = self.request(Method::POST, path, Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST without a body; any 2xx counts, whatever it returns.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Http` or `Network` as for [`TransportClient::request`].
    pub async fn post_empty(&self, path: &str) -> Result<(), TransportError> {
        self.execute(Method::POST, path, None).await.map(|_| ())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, TransportError> {
        let url = self.config.endpoint(path)?;
        tracing::debug!(%method, %url, "api request");

        let request = ApiRequest {
            method,
            url,
            body,
            content_type: self.config.default_content_type,
            with_credentials: self.config.with_credentials,
        };
        let response = match self.backend.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(path, error = %err, "api request got no response");
                return Err(err.into());
            }
        };

        if response.status.is_success() {
            return Ok(response);
        }

        let payload = error_payload(&response.body);
        self.intercept(response.status, path, &payload);
        Err(TransportError::Http {
            status: response.status,
            payload,
        })
    }

    fn intercept(&self, status: StatusCode, path: &str, payload: &Value) {
        match status {
            StatusCode::UNAUTHORIZED => {
                tracing::warn!(path, "session rejected by backend");
                if let Some(handler) = &self.unauthorized {
                    handler.on_unauthorized();
                }
            }
            StatusCode::FORBIDDEN => {
                tracing::warn!(path, "permission denied");
            }
            _ => {
                tracing::error!(path, status = status.as_u16(), %payload, "api error");
            }
        }
    }
}

/// Error bodies are usually JSON, but proxies answer with HTML or plain text.
fn error_payload(body: &str) -> Value {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}
