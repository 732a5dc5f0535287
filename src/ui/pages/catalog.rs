use leptos::prelude::*;

use crate::core::AppRoute;
use crate::ui::auth::use_session;
use crate::ui::navbar::PageLayout;

/// Frame for catalog routes whose content is served by the catalog views
#[component]
pub fn CatalogPage(route: AppRoute) -> impl IntoView {
    view! {
        <PageLayout>
            <h1 class="text-2xl font-bold text-theme-primary">{route.title()}</h1>
            <p class="mt-2 text-theme-secondary">"Catalog content loads here."</p>
        </PageLayout>
    }
}

/// Admin area; the admin-only check lives here rather than in the route guard
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        <PageLayout>
            {move || {
                if session.user().is_some_and(|user| user.is_admin()) {
                    view! {
                        <h1 class="text-2xl font-bold text-theme-primary">
                            {AppRoute::AdminDashboard.title()}
                        </h1>
                    }
                    .into_any()
                } else {
                    view! {
                        <p class="text-theme-secondary">"Access denied: admins only."</p>
                    }
                    .into_any()
                }
            }}
        </PageLayout>
    }
}
