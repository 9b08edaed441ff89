//! Post-login landing page.
//!
//! The token lives in browser storage, so the server always renders the
//! signed-out text and the client fills in the real value after hydration.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::auth::token_store::{LocalStorageTokenStore, TokenStore};
use crate::config::LoginConfig;

fn home_message(signed_in: bool) -> &'static str {
    if signed_in {
        "You are signed in."
    } else {
        "No session token found."
    }
}

/// Whether `store` holds a token under `key`.
fn has_token<S: TokenStore>(store: &S, key: &str) -> bool {
    store.get(key).is_some()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let signed_in = RwSignal::new(false);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        signed_in.set(has_token(&LocalStorageTokenStore, &config.token_key));
    });

    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <p>{move || home_message(signed_in.get())}</p>
        </div>
    }
}
