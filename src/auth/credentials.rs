//! Credentials entered on the login form and the token issued for them.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use serde::{Deserialize, Serialize};

/// Email/password pair bound to the login form.
///
/// Starts empty, is edited by the form inputs, and is read once per submit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// JSON rendering of the current pair, shown under the form for debugging.
    pub fn diagnostic(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Opaque server-issued token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}
