//! Credential submission workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `submit` call is one POST to the token endpoint. On success the token
//! goes to the token store and the view moves to the home route; on failure
//! the user gets one blocking alert and the text is logged. Either both the
//! store write and navigation happen, or neither does.
//!
//! Nothing here deduplicates submissions: two calls issue two requests.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use super::credentials::{AuthToken, Credentials};
use super::error::SubmissionFailure;
use super::token_store::TokenStore;
use crate::config::LoginConfig;
use crate::net::api::AuthTransport;
use crate::net::headers::content_headers;
use crate::net::types::{HttpResponse, TokenAuthRequest, TokenResponse};
use crate::util::navigate::Navigator;
use crate::util::notify::Notifier;

pub struct SubmissionWorkflow<T, S, N, A> {
    config: LoginConfig,
    transport: T,
    store: S,
    navigator: N,
    notifier: A,
}

impl<T, S, N, A> SubmissionWorkflow<T, S, N, A>
where
    T: AuthTransport,
    S: TokenStore,
    N: Navigator,
    A: Notifier,
{
    pub fn new(config: LoginConfig, transport: T, store: S, navigator: N, notifier: A) -> Self {
        Self {
            config,
            transport,
            store,
            navigator,
            notifier,
        }
    }

    /// Exchange `credentials` for a token and act on the outcome.
    ///
    /// The failure is already alerted and logged when `Err` comes back; the
    /// result only lets the caller observe what happened.
    pub async fn submit(&self, credentials: &Credentials) -> Result<(), SubmissionFailure> {
        log::debug!("submitting credentials to {}", self.config.token_endpoint);
        match self.exchange(credentials).await {
            Ok(token) => {
                self.store.set(&self.config.token_key, token.as_str());
                log::info!("login succeeded; navigating to {}", self.config.home_path);
                self.navigator.navigate_to(&self.config.home_path);
                Ok(())
            }
            Err(failure) => {
                let text = failure.to_string();
                self.notifier.alert(&text);
                log::error!("login failed: {text}");
                Err(failure)
            }
        }
    }

    /// Run `submit` on the local executor and return immediately.
    ///
    /// `on_done` fires once with the outcome, after the store write and
    /// navigation (or the alert) have happened.
    pub fn dispatch<F>(self, credentials: Credentials, on_done: F)
    where
        Self: 'static,
        F: FnOnce(Result<(), SubmissionFailure>) + 'static,
    {
        leptos::task::spawn_local(async move {
            let outcome = self.submit(&credentials).await;
            on_done(outcome);
        });
    }

    async fn exchange(&self, credentials: &Credentials) -> Result<AuthToken, SubmissionFailure> {
        let body = encode_credentials(credentials)?;
        let resp = self
            .transport
            .post_json(&self.config.token_endpoint, body, content_headers())
            .await
            .map_err(SubmissionFailure::Transport)?;
        decode_token(&resp)
    }
}

/// Serialize the request body `{ "email", "password" }`.
pub fn encode_credentials(credentials: &Credentials) -> Result<String, SubmissionFailure> {
    serde_json::to_string(&TokenAuthRequest::from(credentials))
        .map_err(|e| SubmissionFailure::Encode(e.to_string()))
}

/// Turn a raw response into a token, or the failure the user should see.
pub fn decode_token(resp: &HttpResponse) -> Result<AuthToken, SubmissionFailure> {
    if !resp.is_success() {
        return Err(SubmissionFailure::rejected(resp.status, &resp.body));
    }
    let parsed: TokenResponse = serde_json::from_str(&resp.body)
        .map_err(|e| SubmissionFailure::MalformedResponse(e.to_string()))?;
    if parsed.token.is_empty() {
        return Err(SubmissionFailure::MalformedResponse(
            "token is empty".to_owned(),
        ));
    }
    Ok(AuthToken::from(parsed.token))
}
