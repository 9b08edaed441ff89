//! Login client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build has no environment to read from, so the endpoint, the
//! storage key, and the route targets are fixed defaults. `App` provides the
//! config through Leptos context; tests construct it directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOKEN_ENDPOINT: &str = "/api/token-auth/";
pub const DEFAULT_TOKEN_KEY: &str = "id_token";
pub const DEFAULT_HOME_PATH: &str = "/home";
pub const DEFAULT_SIGNUP_PATH: &str = "/signup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Path the credentials are posted to.
    pub token_endpoint: String,
    /// Token store key the issued token is written under.
    pub token_key: String,
    /// Route navigated to after a successful login.
    pub home_path: String,
    /// Route behind the "Sign up" link.
    pub signup_path: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            signup_path: DEFAULT_SIGNUP_PATH.to_owned(),
        }
    }
}

impl LoginConfig {
    /// Override the post-login route, keeping the other defaults.
    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }

    /// Override the token store key, keeping the other defaults.
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }
}
