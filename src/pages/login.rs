//! Login page with the email + password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::token_store::LocalStorageTokenStore;
use crate::auth::workflow::SubmissionWorkflow;
use crate::config::LoginConfig;
use crate::net::api::BrowserTransport;
use crate::state::login::LoginState;
use crate::util::navigate::RouterNavigator;
use crate::util::notify::AlertNotifier;

/// Login page: the form plus a link to the signup route.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let signup_path = config.signup_path.clone();

    let on_signup = {
        let signup_path = signup_path.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            navigate(&signup_path, NavigateOptions::default());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gestão"</h1>
                <p class="login-card__subtitle">"Sign in with your email"</p>
                <LoginForm/>
                <div class="login-divider"></div>
                <a href=signup_path class="login-link" on:click=on_signup>
                    "Sign up"
                </a>
            </div>
        </div>
    }
}

/// Credential form. Submitting dispatches the token exchange and returns
/// immediately; the outcome shows up as a navigation or an alert, after which
/// the status line clears and the form can be submitted again.
#[component]
pub fn LoginForm() -> impl IntoView {
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let login = RwSignal::new(LoginState::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = login.try_update(LoginState::begin_submission) else {
            return;
        };
        let workflow = SubmissionWorkflow::new(
            config.clone(),
            BrowserTransport,
            LocalStorageTokenStore,
            RouterNavigator::new(navigate.clone()),
            AlertNotifier,
        );
        workflow.dispatch(credentials, move |_| {
            let _ = login.try_update(LoginState::finish_submission);
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <input
                class="login-input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || login.with(|s| s.credentials.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    login.update(|s| s.credentials.email = value);
                }
            />
            <input
                class="login-input"
                type="password"
                placeholder="Password"
                prop:value=move || login.with(|s| s.credentials.password.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    login.update(|s| s.credentials.password = value);
                }
            />
            <button class="login-button" type="submit">
                "Sign in"
            </button>
        </form>
        {move || {
            login
                .with(LoginState::status_message)
                .map(|msg| view! { <p class="login-message">{msg}</p> })
        }}
        <p class="login-diagnostic">{move || login.with(|s| s.credentials.diagnostic())}</p>
    }
}
