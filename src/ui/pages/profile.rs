//! User profile page
//!
//! Renders the stored user at once, then refreshes it from the backend and
//! folds the result back into the session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::SIGN_IN_PATH;
use crate::core::api::BackendClient;
use crate::ui::auth::{UserAvatar, use_session};
use crate::ui::common::ErrorMessage;
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::PageLayout;

/// Profile page component
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let refresh_error = RwSignal::new(None::<String>);

    // Refresh once after mount
    Effect::new(move |_| {
        let Some(credential) = session.credential() else {
            return;
        };
        spawn_local(async move {
            let client = BackendClient::from_document();
            match client.fetch_profile(&credential).await {
                Ok(user) => session.update_user(user),
                Err(e) => {
                    leptos::logging::warn!("Failed to fetch user: {}", e);
                    refresh_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let handle_logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        navigate(SIGN_IN_PATH, Default::default());
    };

    view! {
        <PageLayout>
            <div class="max-w-md mx-auto space-y-6">
                <ErrorMessage error=refresh_error />

                {move || {
                    session.user().map(|user| {
                        let is_admin = user.is_admin();
                        view! {
                            <section class="bg-theme-secondary/30 rounded-xl p-6 border border-theme text-center space-y-4">
                                <div class="flex justify-center">
                                    <UserAvatar user=user.clone() size=96 />
                                </div>
                                <h2 class="text-xl font-semibold text-theme-primary">
                                    {user.username.clone()}
                                </h2>
                                <p class="text-theme-secondary">{user.email.clone()}</p>

                                <div class="flex flex-col gap-2">
                                    {is_admin.then(|| view! {
                                        <A
                                            href="/admin-dashboard"
                                            attr:class="px-4 py-2 text-sm font-medium text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors"
                                        >
                                            "Go to Dashboard"
                                        </A>
                                    })}
                                    <A
                                        href="/home"
                                        attr:class="px-4 py-2 text-sm font-medium border border-theme text-theme-primary hover:bg-theme-secondary rounded-lg transition-colors"
                                    >
                                        "Go to HomePage"
                                    </A>
                                    <A
                                        href="/edit-profile"
                                        attr:class="px-4 py-2 text-sm font-medium border border-theme text-theme-primary hover:bg-theme-secondary rounded-lg transition-colors"
                                    >
                                        "Edit Profile"
                                    </A>
                                </div>
                            </section>
                        }
                    })
                }}

                <button
                    class="w-full flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium text-red-500
                           border border-red-300 dark:border-red-700 rounded-lg
                           hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors"
                    on:click=handle_logout
                >
                    <Icon name=icons::LOGOUT class="w-4 h-4" />
                    "Logout"
                </button>
            </div>
        </PageLayout>
    }
}
