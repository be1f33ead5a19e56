#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod catalog_service;
pub mod config;
pub mod error;
pub mod session;
pub mod transport;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use config::ApiConfig;
pub use error::{
    AppServicesError, AuthError, CatalogError, ConfigError, NetworkError, TransportError,
};
pub use reqwest::{Method, StatusCode};
pub use session::{Access, LoginRedirect, NoRedirect, SessionGate, SessionState};
pub use transport::{
    ApiRequest, ApiResponse, HttpBackend, ReqwestBackend, StubBackend, TransportClient,
    UnauthorizedHandler,
};
