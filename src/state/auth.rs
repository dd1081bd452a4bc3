//! Authentication state and its actions.
//!
//! One [`AuthState`] lives in an `RwSignal` for the whole app. It is
//! rebuilt fresh on every page load from the session vault and after
//! that only the actions in this module write to it.
//!
//! ERROR HANDLING
//! ==============
//! This is the only layer that turns a technical [`ApiError`] into a
//! user-facing banner message. The original error is re-thrown to the
//! caller alongside, so pages can still distinguish a rejected login
//! from a network problem.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::AuthClient;
use crate::net::error::ApiError;
use crate::net::http::Dispatch;
use crate::net::types::{ServerResponse, Session};
use crate::session::SessionVault;
use crate::storage::KeyValue;

/// Fallback banner text when a login fails without a server message.
pub const GENERIC_LOGIN_ERROR: &str = "Error al iniciar sesión";
/// Fallback banner text when registration fails without a server message.
pub const GENERIC_REGISTER_ERROR: &str = "Error al registrarse";

/// Where the auth flow currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Nothing in flight; a session may or may not exist.
    #[default]
    Idle,
    /// A login or registration call is in flight.
    Pending,
    /// The last attempt failed; `error` carries the banner message.
    Error,
}

/// Authentication state tracking the current session and request
/// status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub status: AuthStatus,
    pub error: Option<String>,
}

impl AuthState {
    /// Rebuild state from durable storage, done once at startup.
    ///
    /// Only a complete token-and-user pair restores a session; a lone
    /// leftover key reads as signed out.
    pub fn restore<S: KeyValue>(vault: &SessionVault<S>) -> Self {
        Self {
            session: vault.session(),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn loading(&self) -> bool {
        self.status == AuthStatus::Pending
    }
}

/// Banner message for a failed attempt: the server's explanation when
/// it sent one, otherwise the generic fallback.
fn banner_message(err: &ApiError, fallback: &str) -> String {
    err.server_message()
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}

/// Log in and update the shared state.
///
/// A second call while one is pending is rejected with
/// [`ApiError::Busy`] and does not touch the state or the network.
/// On success the session is returned so the caller can react to it;
/// on failure the original error is re-thrown after the banner message
/// is stored.
///
/// # Errors
///
/// [`ApiError::Busy`] while pending; otherwise whatever the client
/// surfaced.
pub async fn login<D: Dispatch, S: KeyValue>(
    auth: RwSignal<AuthState>,
    client: &AuthClient<D, S>,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    if auth.with_untracked(AuthState::loading) {
        return Err(ApiError::Busy);
    }

    auth.update(|state| {
        state.status = AuthStatus::Pending;
        state.error = None;
    });

    match client.login(email, password).await {
        Ok(session) => {
            auth.update(|state| {
                state.session = Some(session.clone());
                state.status = AuthStatus::Idle;
            });
            Ok(session)
        }
        Err(err) => {
            auth.update(|state| {
                state.status = AuthStatus::Error;
                state.error = Some(banner_message(&err, GENERIC_LOGIN_ERROR));
            });
            Err(err)
        }
    }
}

/// Register a SuperAdmin and their league. No session is stored; the
/// account still needs email verification and a normal login.
///
/// # Errors
///
/// [`ApiError::Busy`] while another attempt is pending; otherwise
/// whatever the client surfaced.
pub async fn register_super_admin<D: Dispatch, S: KeyValue>(
    auth: RwSignal<AuthState>,
    client: &AuthClient<D, S>,
    email: &str,
    password: &str,
    league_name: &str,
) -> Result<ServerResponse, ApiError> {
    if auth.with_untracked(AuthState::loading) {
        return Err(ApiError::Busy);
    }

    auth.update(|state| {
        state.status = AuthStatus::Pending;
        state.error = None;
    });

    match client.register_super_admin(email, password, league_name).await {
        Ok(response) => {
            auth.update(|state| state.status = AuthStatus::Idle);
            Ok(response)
        }
        Err(err) => {
            auth.update(|state| {
                state.status = AuthStatus::Error;
                state.error = Some(banner_message(&err, GENERIC_REGISTER_ERROR));
            });
            Err(err)
        }
    }
}

/// Drop the session and reset the state. Synchronous, cannot fail, and
/// a no-op when already signed out.
pub fn logout<D: Dispatch, S: KeyValue>(auth: RwSignal<AuthState>, client: &AuthClient<D, S>) {
    client.logout();
    auth.update(|state| *state = AuthState::default());
}

/// Dismiss the banner message. The session and any pending attempt are
/// untouched.
pub fn clear_error(auth: RwSignal<AuthState>) {
    auth.update(|state| {
        state.error = None;
        if state.status == AuthStatus::Error {
            state.status = AuthStatus::Idle;
        }
    });
}
