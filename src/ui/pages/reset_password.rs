use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::core::SIGN_IN_PATH;
use crate::core::api::BackendClient;
use crate::core::validation::{require, validate_email, validate_password_strength};
use crate::ui::common::{ErrorMessage, FormField, SubmitButton, SuccessMessage};
use crate::ui::navbar::AuthCard;
use crate::ui::navigation::navigate_after;

const REDIRECT_DELAY_MS: u32 = 1500;

/// Reset-password page: email, mailed reset code and the new password
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    // Prefilled when arriving from the forgot-password view
    let email = RwSignal::new(
        query
            .with_untracked(|q| q.get("email"))
            .unwrap_or_default(),
    );
    let reset_code = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        message.set(None);

        let email_val = email.get_untracked();
        let code_val = reset_code.get_untracked();
        let password_val = new_password.get_untracked();

        let checked = validate_email(&email_val)
            .and_then(|_| require("Reset code", &code_val))
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
                .reset_password(&email_val, &code_val, &password_val)
                .await
            {
                Ok(msg) => {
                    message.set(Some(msg));
                    email.set(String::new());
                    reset_code.set(String::new());
                    new_password.set(String::new());
                    navigate_after(navigate, SIGN_IN_PATH, REDIRECT_DELAY_MS);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    view! {
        <AuthCard>
            <form on:submit=on_submit class="space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">"Reset Password"</h2>
                </div>

                <ErrorMessage error=error />
                <SuccessMessage message=message />

                <FormField
                    label="Email"
                    name="email"
                    input_type="email"
                    autocomplete="email"
                    required=true
                    value=email
                    on_input=move |v| email.set(v)
                />

                <FormField
                    label="Reset Code"
                    name="reset_code"
                    autocomplete="one-time-code"
                    required=true
                    value=reset_code
                    on_input=move |v| reset_code.set(v)
                />

                <FormField
                    label="New Password"
                    name="new_password"
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                    value=new_password
                    on_input=move |v| new_password.set(v)
                />

                <SubmitButton label="Reset Password" busy_label="Resetting..." busy=loading />

                <div class="text-center text-sm">
                    <A href="/signin" attr:class="text-accent-primary hover:text-accent-primary-hover">
                        "Back to Sign In"
                    </A>
                </div>
            </form>
        </AuthCard>
    }
}
