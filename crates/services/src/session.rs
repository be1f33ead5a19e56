use std::sync::{Arc, Mutex};

use campus_core::model::Session;
use tokio::sync::watch;

use crate::transport::UnauthorizedHandler;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

/// Outcome of the render-time check a protected view performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(Session),
    RedirectToLogin,
}

/// Navigation to the login boundary, however the front-end does it.
pub trait LoginRedirect: Send + Sync {
    /// May be called repeatedly; calling it while already on the way to
    /// login must be harmless.
    fn redirect_to_login(&self);
}

/// For headless use where there is nowhere to navigate to.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRedirect;

impl LoginRedirect for NoRedirect {
    fn redirect_to_login(&self) {}
}

/// Owner of the process-wide session.
///
/// Consumers read through `&SessionGate`; only the gate (driven by
/// `AuthService` and the transport's 401 interceptor) changes the state.
pub struct SessionGate {
    state: watch::Sender<SessionState>,
    last_error: Mutex<Option<String>>,
    redirect: Arc<dyn LoginRedirect>,
}

impl SessionGate {
    #[must_use]
    pub fn new(redirect: Arc<dyn LoginRedirect>) -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            state,
            last_error: Mutex::new(None),
            redirect,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        match &*self.state.borrow() {
            SessionState::Authenticated(session) => Some(session.clone()),
            SessionState::Anonymous => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.borrow(), SessionState::Authenticated(_))
    }

    /// Synchronous check for protected views; never waits on the network.
    #[must_use]
    pub fn check_access(&self) -> Access {
        self.session()
            .map_or(Access::RedirectToLogin, Access::Granted)
    }

    /// Observe state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Message of the most recent failed login, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub(crate) fn establish(&self, session: Session) {
        self.set_last_error(None);
        self.state.send_replace(SessionState::Authenticated(session));
    }

    pub(crate) fn record_login_error(&self, message: String) {
        self.set_last_error(Some(message));
    }

    pub(crate) fn clear(&self) {
        self.state.send_if_modified(|state| {
            if matches!(state, SessionState::Anonymous) {
                return false;
            }
            *state = SessionState::Anonymous;
            true
        });
    }

    fn set_last_error(&self, message: Option<String>) {
        if let Ok(mut guard) = self.last_error.lock() {
            *guard = message;
        }
    }
}

impl UnauthorizedHandler for SessionGate {
    fn on_unauthorized(&self) {
        if self.is_authenticated() {
            tracing::info!("session expired, signing out");
        }
        self.clear();
        self.redirect.redirect_to_login();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::model::{User, UserId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingRedirect(AtomicUsize);

    impl LoginRedirect for CountingRedirect {
        fn redirect_to_login(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn session() -> Session {
        Session::new(User {
            id: UserId::new(1),
            name: "Asha".into(),
            phone: "9876543210".into(),
            email: None,
            class_level: None,
            role: Default::default(),
            payment_status: true,
        })
    }

    #[test]
    fn starts_anonymous() {
        let gate = SessionGate::new(Arc::new(NoRedirect));
        assert_eq!(gate.state(), SessionState::Anonymous);
        assert_eq!(gate.check_access(), Access::RedirectToLogin);
    }

    #[test]
    fn establish_grants_access_and_clears_error() {
        let gate = SessionGate::new(Arc::new(NoRedirect));
        gate.record_login_error("Phone number not found.".into());
        gate.establish(session());

        assert!(gate.is_authenticated());
        assert_eq!(gate.check_access(), Access::Granted(session()));
        assert_eq!(gate.last_error(), None);
    }

    #[test]
    fn unauthorized_clears_and_redirects_every_time() {
        let redirect = Arc::new(CountingRedirect::default());
        let gate = SessionGate::new(redirect.clone());
        gate.establish(session());

        gate.on_unauthorized();
        gate.on_unauthorized();

        assert_eq!(gate.state(), SessionState::Anonymous);
        assert_eq!(redirect.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn subscribers_see_transitions_but_not_redundant_clears() {
        let gate = SessionGate::new(Arc::new(NoRedirect));
        let mut changes = gate.subscribe();

        gate.clear();
        assert!(!changes.has_changed().unwrap());

        gate.establish(session());
        assert!(changes.has_changed().unwrap());
        let _ = changes.borrow_and_update();

        gate.clear();
        assert!(changes.has_changed().unwrap());
        assert_eq!(*changes.borrow(), SessionState::Anonymous);
    }
}
