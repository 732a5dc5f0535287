//! Forgot-password page
//!
//! Asks the backend to mail a reset code, then moves on to the reset view with
//! the email carried in the query string.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::api::BackendClient;
use crate::core::validation::validate_email;
use crate::ui::common::{ErrorMessage, FormField, SubmitButton, SuccessMessage};
use crate::ui::navbar::AuthCard;
use crate::ui::navigation::navigate_after;

const REDIRECT_DELAY_MS: u32 = 1500;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        message.set(None);

        let email_val = email.get_untracked();
        if let Err(e) = validate_email(&email_val) {
            error.set(Some(e.to_string()));
            return;
        }

        loading.set(true);
        let navigate = navigate.clone();

        spawn_local(async move {
            let client = BackendClient::from_document();
            match client.forgot_password(&email_val).await {
                Ok(msg) => {
                    message.set(Some(msg));
                    navigate_after(navigate, reset_path_for(&email_val), REDIRECT_DELAY_MS);
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
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Enter your email and we'll send you a reset code."
                    </p>
                </div>

                <ErrorMessage error=error />
                <SuccessMessage message=message />

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

                <SubmitButton label="Send Reset Code" busy_label="Sending..." busy=loading />

                <div class="text-center text-sm">
                    <A href="/signin" attr:class="text-accent-primary hover:text-accent-primary-hover">
                        "Back to Sign In"
                    </A>
                </div>
            </form>
        </AuthCard>
    }
}

/// Reset view path with the email prefilled
fn reset_path_for(email: &str) -> String {
    format!("/reset-password?email={}", urlencoding::encode(email.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_path_encodes_email() {
        assert_eq!(
            reset_path_for("a.b+c@example.com"),
            "/reset-password?email=a.b%2Bc%40example.com"
        );
    }
}
