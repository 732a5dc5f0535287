//! User menu component
//!
//! Shows sign-in/register links when signed out, or the user's avatar with a
//! dropdown of account actions when signed in.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_session;
use crate::core::{SIGN_IN_PATH, User};
use crate::ui::icon::{Icon, icons};

/// User menu component for the navbar
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // Dropdown open state
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        session.logout();
        navigate(SIGN_IN_PATH, Default::default());
    };

    view! {
        <div class="relative">
            {move || {
                match session.user() {
                    None => {
                        view! {
                            <div class="flex items-center gap-2">
                                <A
                                    href="/signin"
                                    attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                >
                                    "Sign In"
                                </A>
                                <A
                                    href="/register"
                                    attr:class="px-3 py-1.5 text-sm font-medium text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors"
                                >
                                    "Register"
                                </A>
                            </div>
                        }.into_any()
                    }
                    Some(user) => {
                        let handle_logout = handle_logout.clone();
                        view! {
                            <div class="relative">
                                <button
                                    class="flex items-center gap-2 p-1 rounded-lg hover:bg-theme-secondary transition-colors"
                                    on:click=move |_| menu_open.update(|v| *v = !*v)
                                >
                                    <UserAvatar user=user.clone() size=32 />
                                    <span class="hidden sm:block text-sm font-medium text-theme-primary max-w-[120px] truncate">
                                        {user.username.clone()}
                                    </span>
                                </button>

                                <Show when=move || menu_open.get()>
                                    <div class="absolute right-0 mt-2 w-56 bg-theme-primary rounded-lg shadow-lg border border-theme py-1 z-50">
                                        <div class="px-4 py-3 border-b border-theme">
                                            <p class="text-sm font-medium text-theme-primary truncate">
                                                {user.username.clone()}
                                            </p>
                                            <p class="text-xs text-theme-tertiary truncate">
                                                {user.email.clone()}
                                            </p>
                                        </div>

                                        <div class="py-1">
                                            <A
                                                href="/profile"
                                                attr:class="w-full px-4 py-2 text-sm text-left text-theme-primary hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                            >
                                                <Icon name=icons::USER class="h-4 w-4" />
                                                "Profile"
                                            </A>
                                            <A
                                                href="/watchlist"
                                                attr:class="w-full px-4 py-2 text-sm text-left text-theme-primary hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                            >
                                                <Icon name=icons::FILM class="h-4 w-4" />
                                                "Watchlist"
                                            </A>
                                        </div>

                                        <div class="border-t border-theme my-1"></div>

                                        <div class="py-1">
                                            <button
                                                class="w-full px-4 py-2 text-sm text-left text-red-500
                                                       hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors
                                                       flex items-center gap-2"
                                                on:click=handle_logout.clone()
                                            >
                                                <Icon name=icons::LOGOUT class="h-4 w-4" />
                                                "Logout"
                                            </button>
                                        </div>
                                    </div>
                                </Show>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

/// User avatar: the profile picture, or an initial on a colour derived from the username
#[component]
pub fn UserAvatar(
    /// User data
    user: User,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    if let Some(url) = &user.profile_pic_url {
        view! {
            <img
                src=url.clone()
                alt=format!("{}'s profile picture", user.username)
                class="rounded-full object-cover"
                style=size_style
            />
        }
        .into_any()
    } else {
        let initial = user
            .username
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        let color = avatar_color(&user.username);

        view! {
            <div
                class=format!("{} rounded-full flex items-center justify-center text-white font-medium {}", color, font_size)
                style=size_style
            >
                {initial}
            </div>
        }
        .into_any()
    }
}

fn avatar_color(username: &str) -> &'static str {
    const COLORS: [&str; 8] = [
        "bg-blue-500",
        "bg-green-500",
        "bg-yellow-500",
        "bg-red-500",
        "bg-purple-500",
        "bg-pink-500",
        "bg-indigo-500",
        "bg-teal-500",
    ];
    let hash = username
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    COLORS[(hash as usize) % COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_color_is_stable() {
        assert_eq!(avatar_color("neo"), avatar_color("neo"));
        assert_eq!(avatar_color(""), "bg-blue-500");
    }
}
