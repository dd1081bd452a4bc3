//! Shared HTTP transport for all API calls.
//!
//! Every request goes through one [`Transport`] pipeline with two
//! cross-cutting stages:
//!
//! * outbound: read the persisted token and attach it as a bearer
//!   credential;
//! * inbound: screen the response status. A 401 on a request that
//!   carried a token clears the stored session, fires the
//!   `on_unauthorized` callback (a redirect to the login screen in the
//!   browser wiring), and still surfaces the error to the caller.
//!
//! The actual network hop sits behind the [`Dispatch`] port:
//! [`FetchDispatch`] implements it with `gloo-net` plus a fixed
//! deadline in the browser, and tests substitute scripted fakes.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::session::SessionVault;
use crate::storage::KeyValue;

/// Fallback API endpoint for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed per-request deadline in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Where the browser is sent when the session expires.
pub const LOGIN_PATH: &str = "/login";

/// API base URL, resolved once at build time from `LIGA_API_URL`.
pub fn base_url_from_env() -> String {
    option_env!("LIGA_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_owned()
}

/// A fully prepared outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRequest {
    pub method: &'static str,
    pub url: String,
    pub body: String,
    /// Bearer credential attached by the outbound stage, if a session
    /// token was present when the request was prepared.
    pub bearer: Option<String>,
}

/// An undecoded response: status plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The server's `message` field, when the body is a JSON object
    /// carrying one.
    fn server_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        value.get("message")?.as_str().map(ToOwned::to_owned)
    }
}

/// Port between the transport pipeline and the network.
pub trait Dispatch {
    /// Perform the network hop for one prepared request.
    fn send(
        &self,
        request: &RawRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// Browser dispatcher: `fetch` via `gloo-net` with a fixed deadline.
/// On non-wasm targets it reports the network as unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchDispatch;

impl Dispatch for FetchDispatch {
    async fn send(&self, request: &RawRequest) -> Result<RawResponse, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            use futures::FutureExt;

            let fetch = fetch_once(request).fuse();
            let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse();
            futures::pin_mut!(fetch, deadline);

            futures::select! {
                result = fetch => result,
                _ = deadline => Err(ApiError::Timeout),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = request;
            Err(ApiError::Network(
                "fetch is only available in the browser".to_owned(),
            ))
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_once(request: &RawRequest) -> Result<RawResponse, ApiError> {
    let mut builder = gloo_net::http::RequestBuilder::new(&request.url)
        .method(gloo_net::http::Method::POST)
        .header("Content-Type", "application/json");
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let response = builder
        .body(request.body.as_str())
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok(RawResponse { status, body })
}

/// Navigate the browser to the login screen. No-op off-browser.
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("redirect to {LOGIN_PATH} requested outside the browser");
    }
}

/// The shared request pipeline.
///
/// Composed once at construction from a dispatcher, the session vault,
/// the base URL, and the unauthorized callback; every API call in the
/// application flows through the same instance semantics.
pub struct Transport<D: Dispatch, S: KeyValue> {
    dispatch: D,
    vault: SessionVault<S>,
    base_url: String,
    on_unauthorized: Box<dyn Fn()>,
}

impl<D: Dispatch, S: KeyValue> Transport<D, S> {
    /// Compose a pipeline. `on_unauthorized` runs after the stored
    /// session is cleared on an expired-session response.
    pub fn new(
        dispatch: D,
        vault: SessionVault<S>,
        base_url: String,
        on_unauthorized: Box<dyn Fn()>,
    ) -> Self {
        Self {
            dispatch,
            vault,
            base_url,
            on_unauthorized,
        }
    }

    /// POST a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`]/[`ApiError::Timeout`] when the hop fails,
    /// [`ApiError::Http`] for non-2xx statuses, [`ApiError::Malformed`]
    /// when a 2xx body does not decode.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        let request = self.prepare("POST", path, body);
        log::debug!("api request: {} {}", request.method, request.url);

        let response = match self.dispatch.send(&request).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("api error: {} {}: {err}", request.method, request.url);
                return Err(err);
            }
        };
        log::debug!("api response: {} {}", response.status, request.url);

        self.screen(&request, &response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Outbound stage: resolve the URL and attach the stored bearer
    /// token, if any. Synchronous storage read, nothing else.
    fn prepare(&self, method: &'static str, path: &str, body: &serde_json::Value) -> RawRequest {
        RawRequest {
            method,
            url: format!("{}{path}", self.base_url),
            body: body.to_string(),
            bearer: self.vault.token(),
        }
    }

    /// Inbound stage: map non-2xx statuses to errors and run the
    /// session-expiry side effect.
    ///
    /// The expiry handling only fires for requests that carried a
    /// bearer credential; an unauthenticated 401 (a rejected login) is
    /// an ordinary HTTP error and leaves storage alone.
    fn screen(&self, request: &RawRequest, response: &RawResponse) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }

        if response.status == 401 && request.bearer.is_some() {
            log::warn!("session expired; clearing stored credentials");
            self.vault.clear();
            (self.on_unauthorized)();
        }

        Err(ApiError::Http {
            status: response.status,
            message: response.server_message(),
        })
    }
}
