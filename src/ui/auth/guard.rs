//! Route guard component
//!
//! Decides during render, so a signed-out visitor never sees the guarded view,
//! not even for one frame. The guarded view is rebuilt only when the decision
//! flips, not on every session change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use super::context::use_session;
use crate::core::GuardOutcome;

/// Render `children` only while a user is signed in, otherwise redirect to sign-in
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let outcome = use_session().guard_outcome();

    move || match outcome.get() {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect(path) => view! {
            <Redirect
                path=path
                options=NavigateOptions {
                    replace: true,
                    ..Default::default()
                }
            />
        }
        .into_any(),
    }
}
