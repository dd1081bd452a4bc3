//! Wire and domain records exchanged with the server.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User record from the login response.
///
/// The server owns this shape, so every field is optional and unknown
/// fields are ignored; the client only relies on what it can display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, rename = "nombreLiga")]
    pub league_name: Option<String>,
}

/// An authenticated identity: the bearer token and the user it belongs
/// to. Created by a successful login, destroyed by logout or session
/// expiry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Generic acknowledgement body used by registration and password-reset
/// endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerResponse {
    #[serde(default)]
    pub message: Option<String>,
}
