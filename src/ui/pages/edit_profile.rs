//! Edit-profile page
//!
//! Sends the changed username, picture URL and optional password change to the
//! backend, then applies the returned user to the session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::api::{ApiError, BackendClient, ProfileUpdate};
use crate::core::validation::{ValidationError, require, validate_password_strength, validate_username};
use crate::ui::auth::use_session;
use crate::ui::common::{ErrorMessage, FormField, SubmitButton, SuccessMessage};
use crate::ui::navbar::PageLayout;
use crate::ui::navigation::navigate_after;

const REDIRECT_DELAY_MS: u32 = 1000;

/// Build the update body from the form values
fn build_update(
    username: &str,
    profile_pic_url: &str,
    current_password: String,
    new_password: String,
) -> Result<ProfileUpdate, ValidationError> {
    validate_username(username)?;
    if !new_password.is_empty() {
        require("Current password", &current_password)?;
        validate_password_strength(&new_password)?;
    }

    let profile_pic_url = profile_pic_url.trim();
    Ok(ProfileUpdate {
        username: username.trim().to_string(),
        profile_pic_url: (!profile_pic_url.is_empty()).then(|| profile_pic_url.to_string()),
        ..Default::default()
    }
    .with_password_change(current_password, new_password))
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let initial = session.user();
    let username = RwSignal::new(
        initial
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default(),
    );
    let profile_pic_url = RwSignal::new(
        initial
            .and_then(|u| u.profile_pic_url)
            .unwrap_or_default(),
    );
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let update = match build_update(
            &username.get_untracked(),
            &profile_pic_url.get_untracked(),
            current_password.get_untracked(),
            new_password.get_untracked(),
        ) {
            Ok(update) => update,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        // The guard keeps this view signed in; a missing credential means the
        // session was cleared mid-edit.
        let Some(credential) = session.credential() else {
            error.set(Some(ApiError::Unauthorized.to_string()));
            return;
        };

        saving.set(true);
        let navigate = navigate.clone();

        spawn_local(async move {
            let client = BackendClient::from_document();
            match client.update_profile(&credential, &update).await {
                Ok(user) => {
                    session.update_user(user);
                    current_password.set(String::new());
                    new_password.set(String::new());
                    success.set(Some("Profile updated!".to_string()));
                    navigate_after(navigate, "/profile", REDIRECT_DELAY_MS);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <PageLayout>
            <form on:submit=on_submit class="max-w-md mx-auto space-y-6">
                <h1 class="text-2xl font-bold text-theme-primary">"Edit Profile"</h1>

                <ErrorMessage error=error />
                <SuccessMessage message=success />

                <FormField
                    label="Name"
                    name="username"
                    autocomplete="username"
                    required=true
                    value=username
                    on_input=move |v| username.set(v)
                />

                <FormField
                    label="Profile Picture URL"
                    name="profile_pic"
                    input_type="url"
                    placeholder="https://"
                    value=profile_pic_url
                    on_input=move |v| profile_pic_url.set(v)
                />

                <div class="border-t border-theme pt-6 space-y-4">
                    <h2 class="text-lg font-semibold text-theme-primary">
                        "Change Password (Optional)"
                    </h2>
                    <FormField
                        label="Current Password"
                        name="current_password"
                        input_type="password"
                        autocomplete="current-password"
                        value=current_password
                        on_input=move |v| current_password.set(v)
                    />
                    <FormField
                        label="New Password"
                        name="new_password"
                        input_type="password"
                        autocomplete="new-password"
                        value=new_password
                        on_input=move |v| new_password.set(v)
                    />
                </div>

                <SubmitButton label="Save Changes" busy_label="Saving..." busy=saving />

                <div class="text-center text-sm">
                    <A href="/profile" attr:class="text-accent-primary hover:text-accent-primary-hover">
                        "Cancel"
                    </A>
                </div>
            </form>
        </PageLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_update_without_password_change() {
        let update = build_update(" neo ", "", "old".to_string(), String::new()).unwrap();
        assert_eq!(update.username, "neo");
        assert!(update.profile_pic_url.is_none());
        assert!(update.new_password.is_none());
        assert!(update.current_password.is_none());
    }

    #[test]
    fn test_build_update_with_password_change() {
        let update = build_update(
            "neo",
            "https://img.example/n.png",
            "Old1!pass".to_string(),
            "New1!pass".to_string(),
        )
        .unwrap();
        assert_eq!(update.profile_pic_url.as_deref(), Some("https://img.example/n.png"));
        assert_eq!(update.new_password.as_deref(), Some("New1!pass"));
    }

    #[test]
    fn test_build_update_requires_current_password() {
        let err = build_update("neo", "", String::new(), "New1!pass".to_string()).unwrap_err();
        assert_eq!(err, ValidationError::Required("Current password"));
    }

    #[test]
    fn test_build_update_rejects_weak_new_password() {
        let err = build_update("neo", "", "old".to_string(), "weak".to_string()).unwrap_err();
        assert_eq!(err, ValidationError::WeakPassword);
    }

    #[test]
    fn test_build_update_rejects_blank_username() {
        assert_eq!(
            build_update(" ", "", String::new(), String::new()).unwrap_err(),
            ValidationError::EmptyUsername
        );
    }
}
