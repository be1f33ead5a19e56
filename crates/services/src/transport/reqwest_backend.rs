use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use super::{ApiRequest, ApiResponse, HttpBackend};
use crate::config::ApiConfig;
use crate::error::NetworkError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production backend over `reqwest`.
///
/// With credentials enabled the client keeps a cookie store, so the session
/// cookie set by the login endpoint rides along on every later call.
#[derive(Clone)]
pub struct ReqwestBackend {
    client: Client,
}

impl ReqwestBackend {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .cookie_store(config.with_credentials)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, NetworkError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .header(CONTENT_TYPE, request.content_type);
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder
            .send()
            .await
            .map_err(|err| NetworkError(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| NetworkError(err.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
