//! Sign-in form component
//!
//! Exchanges email and password for a user and bearer token, then stores both
//! in the session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_session;
use crate::core::HOME_PATH;
use crate::core::api::{BackendClient, LoginResponse};
use crate::core::validation::{require, validate_email};
use crate::ui::common::{ErrorMessage, FormField, SubmitButton};

/// Sign-in form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        if let Err(e) = validate_email(&email_val).and_then(|_| require("Password", &password_val))
        {
            error.set(Some(e.to_string()));
            return;
        }

        loading.set(true);
        let navigate = navigate.clone();

        spawn_local(async move {
            let client = BackendClient::from_document();
            match client.login(&email_val, &password_val).await {
                Ok(LoginResponse { user, token }) => {
                    session.login(user, token);
                    navigate(HOME_PATH, Default::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Sign In"</h2>
            </div>

            <ErrorMessage error=error />

            <FormField
                label="Email"
                name="email"
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                required=true
                value=email
                on_input=move |v| email.set(v)
            />

            <FormField
                label="Password"
                name="password"
                input_type="password"
                autocomplete="current-password"
                placeholder="Enter your password"
                required=true
                value=password
                on_input=move |v| password.set(v)
            />

            <SubmitButton label="Login" busy_label="Signing in..." busy=loading />

            <div class="text-center text-sm text-theme-secondary space-y-2">
                <p>
                    "Don't have an account? "
                    <A href="/register" attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                        "Register"
                    </A>
                </p>
                <p>
                    <A href="/forgot-password" attr:class="text-accent-primary hover:text-accent-primary-hover">
                        "Forgot Password?"
                    </A>
                </p>
            </div>
        </form>
    }
}
