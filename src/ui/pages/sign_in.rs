//! Sign-in page
//!
//! Sends an already signed-in visitor straight to the home view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::core::HOME_PATH;
use crate::ui::auth::{LoginForm, use_session};
use crate::ui::navbar::AuthCard;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();

    move || {
        if session.is_signed_in() {
            view! {
                <Redirect
                    path=HOME_PATH
                    options=NavigateOptions { replace: true, ..Default::default() }
                />
            }
            .into_any()
        } else {
            view! {
                <AuthCard>
                    <LoginForm />
                </AuthCard>
            }
            .into_any()
        }
    }
}
