//! Wire schema for `POST /api/token-auth/`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::auth::credentials::Credentials;

/// Request body: exactly `{ "email", "password" }`.
#[derive(Debug, Serialize)]
pub struct TokenAuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for TokenAuthRequest<'a> {
    fn from(creds: &'a Credentials) -> Self {
        Self {
            email: &creds.email,
            password: &creds.password,
        }
    }
}

/// Success body. Extra fields sent by the server are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Raw HTTP outcome handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
