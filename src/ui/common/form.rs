use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn FormField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Input name, also used as the element id
    name: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(into, default = String::new())]
    placeholder: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    #[prop(into)]
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=name class="block text-sm font-medium text-theme-primary">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                placeholder=placeholder
                required=required
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary placeholder-theme-tertiary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                       transition-colors"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Full-width submit button with a busy state
#[component]
pub fn SubmitButton(
    /// Button text
    label: &'static str,
    /// Text shown while `busy` is true
    busy_label: &'static str,
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                   text-white font-medium rounded-lg
                   focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                   disabled:opacity-50 disabled:cursor-not-allowed
                   transition-colors"
            disabled=move || busy.get()
        >
            {move || {
                if busy.get() {
                    view! {
                        <span class="flex items-center justify-center">
                            <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                            {busy_label}
                        </span>
                    }.into_any()
                } else {
                    view! { <span class="block">{label}</span> }.into_any()
                }
            }}
        </button>
    }
}
