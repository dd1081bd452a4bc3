//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so individual pages can
//! depend on small focused models. Each state struct lives in an
//! `RwSignal` provided via context; the async actions are free
//! functions over the signal, generic over the API client so tests can
//! drive them with scripted fakes.

pub mod auth;
pub mod ui;
