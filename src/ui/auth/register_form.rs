//! Registration form component
//!
//! Creates an account, then sends the visitor to sign in. Registration does
//! not sign the new user in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::SIGN_IN_PATH;
use crate::core::api::BackendClient;
use crate::core::validation::{validate_email, validate_password_strength, validate_username};
use crate::ui::common::{ErrorMessage, FormField, SubmitButton, SuccessMessage};
use crate::ui::navigation::navigate_after;

/// Delay before leaving for the sign-in view
const REDIRECT_DELAY_MS: u32 = 2000;

/// Registration form component
#[component]
pub fn RegisterForm() -> impl IntoView {
    let navigate = use_navigate();

    // Form state
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let username_val = username.get_untracked();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        let checked = validate_username(&username_val)
            .and_then(|_| validate_email(&email_val))
            .and_then(|_| validate_password_strength(&password_val));
        if let Err(e) = checked {
            error.set(Some(e.to_string()));
            return;
        }

        loading.set(true);
        let navigate = navigate.clone();

        spawn_local(async move {
            let client = BackendClient::from_document();
            match client
                .register(&username_val, &email_val, &password_val)
                .await
            {
                Ok(_) => {
                    success.set(Some(
                        "Registration successful! Redirecting to Sign In...".to_string(),
                    ));
                    navigate_after(navigate, SIGN_IN_PATH, REDIRECT_DELAY_MS);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Register"</h2>
            </div>

            <ErrorMessage error=error />
            <SuccessMessage message=success />

            <FormField
                label="Username"
                name="username"
                autocomplete="username"
                required=true
                value=username
                on_input=move |v| username.set(v)
            />

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
                autocomplete="new-password"
                required=true
                value=password
                on_input=move |v| password.set(v)
            />

            <SubmitButton label="Register" busy_label="Creating account..." busy=loading />

            <div class="text-center text-sm text-theme-secondary">
                "Already have an account? "
                <A href="/signin" attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                    "Sign In"
                </A>
            </div>
        </form>
    }
}
