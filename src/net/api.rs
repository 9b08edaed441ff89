//! HTTP transport for the token-auth exchange.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports itself unavailable, since the
//! login request is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transports return `Err(String)` only for failures below HTTP (network,
//! request building, body read). Any status code, success or not, comes back
//! as an `HttpResponse` so the workflow decides what it means.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::HttpResponse;

/// Issues one JSON POST and returns the raw response.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn post_json(
        &self,
        url: &str,
        body: String,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, String>;
}

/// `gloo-net` transport used by the hydrated page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl AuthTransport for BrowserTransport {
    async fn post_json(
        &self,
        url: &str,
        body: String,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(url);
            for (name, value) in headers {
                builder = builder.header(name, value);
            }
            let resp = builder
                .body(body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| e.to_string())?;
            Ok(HttpResponse::new(status, text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body, headers);
            Err(unavailable_message().to_owned())
        }
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable_message() -> &'static str {
    "not available on server"
}
