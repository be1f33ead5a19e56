use std::sync::Arc;

use services::{ApiConfig, AuthService, CatalogService, LoginRedirect, SessionGate};
use tokio::sync::watch;

pub trait UiApp: Send + Sync {
    fn config(&self) -> ApiConfig;
    fn gate(&self) -> Arc<SessionGate>;
    fn auth(&self) -> Arc<AuthService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn login_redirects(&self) -> LoginRedirects;
}

#[derive(Clone)]
pub struct AppContext {
    config: ApiConfig,
    gate: Arc<SessionGate>,
    auth: Arc<AuthService>,
    catalog: Arc<CatalogService>,
    login_redirects: LoginRedirects,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: app.config(),
            gate: app.gate(),
            auth: app.auth(),
            catalog: app.catalog(),
            login_redirects: app.login_redirects(),
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

    #[must_use]
    pub fn login_redirects(&self) -> LoginRedirects {
        self.login_redirects.clone()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// `LoginRedirect` for the Dioxus front-end.
///
/// Services run outside the component tree, so a redirect is published as a
/// request counter; `RequireSession` watches it and does the navigation.
#[derive(Clone)]
pub struct LoginRedirects {
    requests: Arc<watch::Sender<u64>>,
}

impl LoginRedirects {
    #[must_use]
    pub fn new() -> Self {
        let (requests, _) = watch::channel(0);
        Self {
            requests: Arc::new(requests),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.requests.subscribe()
    }

    /// Total redirects requested so far.
    #[must_use]
    pub fn requested(&self) -> u64 {
        *self.requests.borrow()
    }
}

impl Default for LoginRedirects {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRedirect for LoginRedirects {
    fn redirect_to_login(&self) {
        self.requests.send_modify(|count| *count += 1);
    }
}
