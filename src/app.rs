use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::core::{AppRoute, HOME_PATH};
use crate::ui::auth::{RequireSession, provide_session_context};
use crate::ui::pages::{
    AdminDashboardPage, CatalogPage, EditProfilePage, ForgotPasswordPage, HomePage, NotFoundPage,
    ProfilePage, RegisterPage, ResetPasswordPage, SignInPage,
};

/// HTML document served for every non-asset path. The body stays empty: the
/// client mounts the app itself once it has read the stored session.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    use crate::core::api::BACKEND_META_NAME;
    use crate::core::config::Config;
    use leptos_meta::MetaTags;

    let backend_url = use_context::<Config>()
        .unwrap_or_else(Config::from_env)
        .backend_url()
        .to_string();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_META_NAME content=backend_url/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body></body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Hydrate the session before the router renders its first view
    provide_session_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/reelbase.css"/>
        <Title text="Reelbase"/>

        // Paths are matched against the `AppRoute` table, which also decides
        // which views sit behind the session guard
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=RoutedView/>
                <Route path=path!("/*any") view=RoutedView/>
            </Routes>
        </Router>
    }
}

/// View for the current location, rebuilt only when the matched route changes
#[component]
fn RoutedView() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| location.pathname.with(|path| AppRoute::resolve(path)));

    move || match route.get() {
        None => view! { <NotFoundPage/> }.into_any(),
        Some(route) if route.is_protected() => view! {
            <RequireSession>{route_page(route)}</RequireSession>
        }
        .into_any(),
        Some(route) => route_page(route),
    }
}

fn route_page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Root => view! { <Redirect path=HOME_PATH/> }.into_any(),
        AppRoute::Register => view! { <RegisterPage/> }.into_any(),
        AppRoute::SignIn => view! { <SignInPage/> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage/> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPasswordPage/> }.into_any(),
        AppRoute::Home => view! { <HomePage/> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage/> }.into_any(),
        AppRoute::EditProfile => view! { <EditProfilePage/> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
        AppRoute::Series
        | AppRoute::SeriesDetails
        | AppRoute::Movie
        | AppRoute::Upcoming
        | AppRoute::Recommendations
        | AppRoute::RecommendationsByGenre
        | AppRoute::RecommendationsByLanguage
        | AppRoute::Actor
        | AppRoute::Watchlist => view! { <CatalogPage route=route/> }.into_any(),
    }
}
