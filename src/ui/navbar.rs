//! Top navigation bar shared by the signed-in views

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::UserMenu;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/home" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <Icon name=icons::FILM class="w-5 h-5" />
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"Reelbase"</span>
                    </A>

                    <nav class="hidden md:flex items-center gap-6 text-sm font-medium text-theme-secondary">
                        <A href="/home" exact=true attr:class="hover:text-theme-primary">"Home"</A>
                        <A href="/recommendations" attr:class="hover:text-theme-primary">"Recommendations"</A>
                        <A href="/series" attr:class="hover:text-theme-primary">"Series"</A>
                        <A href="/upcoming" attr:class="hover:text-theme-primary">"Upcoming"</A>
                    </nav>

                    <UserMenu />
                </div>
            </div>
        </header>
    }
}

/// Page frame for the guarded views
#[component]
pub fn PageLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <Navbar />
            <main class="flex-1 max-w-5xl w-full mx-auto px-4 py-8">
                {children()}
            </main>
        </div>
    }
}

/// Centered card used by the sign-in, register and password views
#[component]
pub fn AuthCard(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                {children()}
            </div>
        </div>
    }
}
