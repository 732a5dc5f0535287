//! Inline status messages for forms and views

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="flex items-center gap-2 p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <p class="text-sm text-red-700 dark:text-red-300">
                    {move || error.get().unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}

/// Success message component
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="flex items-center gap-2 p-3 bg-green-50 dark:bg-green-900/20 border border-green-200 dark:border-green-800 rounded-lg">
                <Icon name=icons::CHECK class="w-4 h-4"/>
                <p class="text-sm text-green-700 dark:text-green-300">
                    {move || message.get().unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}
