use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under `/icons`, without the `.svg` extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const FILM: &str = "film";
    pub const LOADER: &str = "loader";
    pub const LOGOUT: &str = "logout";
    pub const USER: &str = "user";
}

#[cfg(test)]
mod tests {
    use super::icons;
    use std::path::Path;

    #[test]
    fn test_every_icon_has_an_svg() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        for name in [
            icons::ALERT_CIRCLE,
            icons::CHECK,
            icons::FILM,
            icons::LOADER,
            icons::LOGOUT,
            icons::USER,
        ] {
            assert!(dir.join(format!("{}.svg", name)).is_file(), "{}", name);
        }
    }

    #[test]
    fn test_no_unlisted_svgs() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        let count = std::fs::read_dir(dir)
            .unwrap()
            .filter(|entry| {
                entry
                    .as_ref()
                    .is_ok_and(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
            })
            .count();
        assert_eq!(count, 6);
    }
}
