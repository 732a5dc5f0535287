use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::use_session;
use crate::ui::navbar::PageLayout;

/// Landing view after sign-in
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .user()
            .map(|user| format!("Welcome back, {}", user.username))
            .unwrap_or_default()
    };

    view! {
        <PageLayout>
            <section class="space-y-6">
                <h1 class="text-3xl font-bold text-theme-primary">{greeting}</h1>
                <p class="text-theme-secondary">
                    "Pick up where you left off, or find something new to watch."
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <HomeTile href="/recommendations" title="Recommendations" blurb="Browse by genre or language" />
                    <HomeTile href="/watchlist" title="Watchlist" blurb="Titles you saved for later" />
                    <HomeTile href="/upcoming" title="Upcoming" blurb="Releases on the way" />
                </div>
            </section>
        </PageLayout>
    }
}

#[component]
fn HomeTile(href: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            attr:class="block p-5 rounded-xl border border-theme bg-theme-secondary/30 hover:bg-theme-secondary transition-colors"
        >
            <h2 class="text-lg font-semibold text-theme-primary">{title}</h2>
            <p class="mt-1 text-sm text-theme-secondary">{blurb}</p>
        </A>
    }
}
