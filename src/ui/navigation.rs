//! Delayed navigation used after a form shows its confirmation message

use leptos_router::NavigateOptions;

/// Navigate to `path` once `delay_ms` has elapsed.
///
/// `navigate` must come from `use_navigate()` in the calling component, since
/// this usually runs inside a task where the router context is gone.
pub fn navigate_after<F>(navigate: F, path: impl Into<String>, delay_ms: u32)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let path = path.into();
    #[cfg(not(feature = "ssr"))]
    {
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            navigate(&path, NavigateOptions::default());
        })
        .forget();
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (navigate, path, delay_ms);
    }
}
