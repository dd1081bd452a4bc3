//! Authentication pages. Thin consumers of the auth state and client:
//! validate locally, delegate to the store actions, render what the
//! state says.

pub mod forgot_password;
pub mod login;
pub mod register;
