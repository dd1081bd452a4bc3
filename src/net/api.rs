//! REST client for the authentication endpoints.
//!
//! Owns session persistence: a successful login is the only code path
//! that writes the durable token and user record, and logout is the
//! only caller-facing path that deletes them (besides the transport's
//! expiry handling).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{Dispatch, FetchDispatch, Transport, base_url_from_env, redirect_to_login};
use crate::net::types::{ServerResponse, Session, User};
use crate::session::SessionVault;
use crate::storage::{BrowserStorage, KeyValue};

/// Auth API client: the transport plus the session vault.
pub struct AuthClient<D: Dispatch, S: KeyValue> {
    transport: Transport<D, S>,
    vault: SessionVault<S>,
}

impl<D: Dispatch, S: KeyValue> AuthClient<D, S> {
    /// Build a client from an already-composed transport and vault.
    /// Both must share the same storage backend.
    pub fn new(transport: Transport<D, S>, vault: SessionVault<S>) -> Self {
        Self { transport, vault }
    }

    /// Exchange credentials for a session.
    ///
    /// On a 2xx response carrying a `token` field, the token and the
    /// full response body are persisted and the session is returned.
    /// Any failure leaves durable storage untouched.
    ///
    /// # Errors
    ///
    /// Transport errors pass through unchanged; a 2xx body without a
    /// token is [`ApiError::Malformed`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body: serde_json::Value = self
            .transport
            .post_json(
                "/api/auth/login",
                &json!({ "email": email, "password": password }),
            )
            .await?;

        let Some(token) = body.get("token").and_then(|v| v.as_str()) else {
            return Err(ApiError::Malformed(
                "login response is missing a token".to_owned(),
            ));
        };
        let user: User = serde_json::from_value(body.clone())
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        self.vault.save(token, &body);
        Ok(Session {
            token: token.to_owned(),
            user,
        })
    }

    /// Register the first user of a league as SuperAdmin.
    ///
    /// Does not persist a session; the account must be verified and
    /// logged in separately.
    ///
    /// # Errors
    ///
    /// Server errors propagate unchanged.
    pub async fn register_super_admin(
        &self,
        email: &str,
        password: &str,
        league_name: &str,
    ) -> Result<ServerResponse, ApiError> {
        self.transport
            .post_json(
                "/api/auth/register/superadmin",
                &json!({
                    "email": email,
                    "password": password,
                    "nombreLiga": league_name,
                }),
            )
            .await
    }

    /// Request a password reset email.
    ///
    /// # Errors
    ///
    /// Server errors propagate unchanged.
    pub async fn forgot_password(&self, email: &str) -> Result<ServerResponse, ApiError> {
        self.transport
            .post_json("/api/auth/forgot-password", &json!({ "email": email }))
            .await
    }

    /// Drop the persisted session. Synchronous, no network call,
    /// idempotent.
    pub fn logout(&self) {
        self.vault.clear();
    }

    /// The persisted user record, if any. Malformed storage reads as
    /// "no session" rather than an error.
    pub fn current_user(&self) -> Option<User> {
        self.vault.user()
    }
}

impl AuthClient<FetchDispatch, BrowserStorage> {
    /// Production wiring: browser fetch, `localStorage`, the build-time
    /// base URL, and a redirect to the login screen on session expiry.
    pub fn browser() -> Self {
        let vault = SessionVault::new(BrowserStorage);
        let transport = Transport::new(
            FetchDispatch,
            vault.clone(),
            base_url_from_env(),
            Box::new(redirect_to_login),
        );
        Self::new(transport, vault)
    }
}
