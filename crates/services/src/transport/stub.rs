use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use super::{ApiRequest, ApiResponse, HttpBackend};
use crate::error::NetworkError;

#[derive(Clone)]
enum StubReply {
    Respond(ApiResponse),
    Unreachable,
}

#[derive(Default)]
struct StubState {
    routes: HashMap<(Method, String), StubReply>,
    requests: Vec<ApiRequest>,
}

/// Scripted in-memory backend for tests and prototyping.
///
/// Routes are keyed by method and URL path; the last registration wins.
/// Unknown routes answer 404 the way the backend does.
#[derive(Clone, Default)]
pub struct StubBackend {
    state: Arc<Mutex<StubState>>,
}

impl StubBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        let body = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };
        self.respond_text(method, path, status, &body)
    }

    /// Answer `method path` with a raw body.
    pub fn respond_text(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.register(
            method,
            path,
            StubReply::Respond(ApiResponse {
                status,
                body: body.to_string(),
            }),
        )
    }

    /// Make `method path` fail as if the server could not be reached.
    pub fn unreachable(&self, method: Method, path: &str) -> &Self {
        self.register(method, path, StubReply::Unreachable)
    }

    /// Every request received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests received for `method path`.
    #[must_use]
    pub fn count(&self, method: &Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.method == *method && request.url.path() == path)
            .count()
    }

    fn register(&self, method: Method, path: &str, reply: StubReply) -> &Self {
        if let Ok(mut state) = self.state.lock() {
            state.routes.insert((method, path.to_string()), reply);
        }
        self
    }
}

#[async_trait]
impl HttpBackend for StubBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, NetworkError> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| NetworkError(err.to_string()))?;
        let key = (request.method.clone(), request.url.path().to_string());
        let reply = state.routes.get(&key).cloned();
        state.requests.push(request);

        match reply {
            Some(StubReply::Respond(response)) => Ok(response),
            Some(StubReply::Unreachable) => Err(NetworkError("connection refused".into())),
            None => Ok(ApiResponse {
                status: StatusCode::NOT_FOUND,
                body: r#"{"detail":"Not found."}"#.to_string(),
            }),
        }
    }
}
