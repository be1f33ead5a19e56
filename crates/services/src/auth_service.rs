use std::sync::Arc;

use campus_core::model::{PhoneNumber, Session, User};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::session::SessionGate;
use crate::transport::TransportClient;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    phone: &'a PhoneNumber,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: User,
}

/// Phone-based sign-in and sign-out, feeding the `SessionGate`.
#[derive(Clone)]
pub struct AuthService {
    transport: Arc<TransportClient>,
    gate: Arc<SessionGate>,
}

impl AuthService {
    #[must_use]
    pub fn new(transport: Arc<TransportClient>, gate: Arc<SessionGate>) -> Self {
        Self { transport, gate }
    }

    /// Sign in with a phone number.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` for a blank phone (nothing is sent) and
    /// `AuthError::Rejected` carrying the backend's message otherwise. The
    /// session state is left untouched on failure.
    pub async fn login(&self, phone: &str) -> Result<Session, AuthError> {
        let phone = match PhoneNumber::parse(phone) {
            Ok(phone) => phone,
            Err(err) => {
                self.gate.record_login_error(err.to_string());
                return Err(err.into());
            }
        };

        let result = self
            .transport
            .post_json::<_, LoginResponse>(LOGIN_PATH, &LoginRequest { phone: &phone })
            .await;

        match result {
            Ok(response) => {
                let session = Session::new(response.user);
                tracing::info!(user = %session.user().id, "signed in");
                self.gate.establish(session.clone());
                Ok(session)
            }
            Err(source) => {
                let message = source
                    .server_message()
                    .map_or_else(|| source.to_string(), str::to_owned);
                tracing::warn!(error = %source, "login rejected");
                self.gate.record_login_error(message.clone());
                Err(AuthError::Rejected { message, source })
            }
        }
    }

    /// Sign out. Best effort: a failed request is logged and the local
    /// session is cleared regardless.
    pub async fn logout(&self) {
        if let Err(err) = self.transport.post_empty(LOGOUT_PATH).await {
            tracing::warn!(error = %err, "logout request failed");
        }
        self.gate.clear();
        tracing::info!("signed out");
    }
}
