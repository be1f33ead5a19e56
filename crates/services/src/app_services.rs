use std::sync::Arc;

use crate::auth_service::AuthService;
use crate::catalog_service::CatalogService;
use crate::config::ApiConfig;
use crate::error::AppServicesError;
use crate::session::{LoginRedirect, SessionGate};
use crate::transport::{HttpBackend, ReqwestBackend, TransportClient, UnauthorizedHandler};

/// Assembles app-facing services around one transport and one session gate.
#[derive(Clone)]
pub struct AppServices {
    config: ApiConfig,
    gate: Arc<SessionGate>,
    auth: Arc<AuthService>,
    catalog: Arc<CatalogService>,
}

impl AppServices {
    /// Build services that talk to the configured backend over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be created.
    pub fn connect(
        config: ApiConfig,
        redirect: Arc<dyn LoginRedirect>,
    ) -> Result<Self, AppServicesError> {
        let backend = ReqwestBackend::new(&config)?;
        tracing::info!(api = %config.base_address, credentials = config.with_credentials, "api client ready");
        Ok(Self::with_backend(config, Arc::new(backend), redirect))
    }

    /// Build services over any backend, e.g. `StubBackend` in tests.
    #[must_use]
    pub fn with_backend(
        config: ApiConfig,
        backend: Arc<dyn HttpBackend>,
        redirect: Arc<dyn LoginRedirect>,
    ) -> Self {
        let gate = Arc::new(SessionGate::new(redirect));
        let interceptor: Arc<dyn UnauthorizedHandler> = gate.clone();
        let transport = Arc::new(
            TransportClient::new(config.clone(), backend).with_unauthorized_handler(interceptor),
        );
        let auth = Arc::new(AuthService::new(Arc::clone(&transport), Arc::clone(&gate)));
        let catalog = Arc::new(CatalogService::new(transport));

        Self {
            config,
            gate,
            auth,
            catalog,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn gate(&self) -> Arc<SessionGate> {
        Arc::clone(&self.gate)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }
}
