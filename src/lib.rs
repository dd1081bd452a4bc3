//! # liga-client
//!
//! Leptos + WASM frontend for the league management application.
//! Covers the authentication flows: login, SuperAdmin registration with
//! league creation, and password reset.
//!
//! This crate contains pages, application state, the REST auth client,
//! and the shared HTTP transport that attaches the session token to
//! outgoing requests and reacts to session expiry. The session itself
//! is persisted in browser `localStorage` behind a small key-value port
//! so the whole flow is testable off-browser.

pub mod app;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod storage;
pub mod util;
