//! Application route table
//!
//! Every path the client knows about, and whether it sits behind the session
//! guard.

/// Who may render a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

/// Path of the sign-in view, the target of every guard redirect
pub const SIGN_IN_PATH: &str = "/signin";

/// Landing path after sign-in
pub const HOME_PATH: &str = "/home";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Register,
    SignIn,
    ForgotPassword,
    ResetPassword,
    Home,
    Series,
    SeriesDetails,
    Movie,
    Upcoming,
    Recommendations,
    RecommendationsByGenre,
    RecommendationsByLanguage,
    Actor,
    Watchlist,
    Profile,
    EditProfile,
    AdminDashboard,
}

impl AppRoute {
    pub const ALL: [AppRoute; 18] = [
        AppRoute::Root,
        AppRoute::Register,
        AppRoute::SignIn,
        AppRoute::ForgotPassword,
        AppRoute::ResetPassword,
        AppRoute::Home,
        AppRoute::Series,
        AppRoute::SeriesDetails,
        AppRoute::Movie,
        AppRoute::Upcoming,
        AppRoute::Recommendations,
        AppRoute::RecommendationsByGenre,
        AppRoute::RecommendationsByLanguage,
        AppRoute::Actor,
        AppRoute::Watchlist,
        AppRoute::Profile,
        AppRoute::EditProfile,
        AppRoute::AdminDashboard,
    ];

    /// Router path pattern (`:name` marks a parameter segment)
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Root => "/",
            AppRoute::Register => "/register",
            AppRoute::SignIn => SIGN_IN_PATH,
            AppRoute::ForgotPassword => "/forgot-password",
            AppRoute::ResetPassword => "/reset-password",
            AppRoute::Home => HOME_PATH,
            AppRoute::Series => "/series",
            AppRoute::SeriesDetails => "/series/:id",
            AppRoute::Movie => "/movie/:id",
            AppRoute::Upcoming => "/upcoming",
            AppRoute::Recommendations => "/recommendations",
            AppRoute::RecommendationsByGenre => "/recommendations/:genre_id",
            AppRoute::RecommendationsByLanguage => "/recommendations/lang/:lang_code",
            AppRoute::Actor => "/actor/:id",
            AppRoute::Watchlist => "/watchlist",
            AppRoute::Profile => "/profile",
            AppRoute::EditProfile => "/edit-profile",
            AppRoute::AdminDashboard => "/admin-dashboard",
        }
    }

    /// Route whose pattern matches `pathname`. A static segment wins over a
    /// parameter, and a trailing slash is ignored.
    pub fn resolve(pathname: &str) -> Option<AppRoute> {
        let segments: Vec<&str> = split_path(pathname).collect();
        AppRoute::ALL
            .into_iter()
            .filter(|route| route.matches(&segments))
            .min_by_key(|route| route.param_count())
    }

    fn matches(&self, segments: &[&str]) -> bool {
        let mut pattern = split_path(self.path());
        let mut segments = segments.iter();
        loop {
            match (pattern.next(), segments.next()) {
                (None, None) => return true,
                (Some(expected), Some(actual)) => {
                    if !expected.starts_with(':') && expected != *actual {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }

    fn param_count(&self) -> usize {
        split_path(self.path())
            .filter(|segment| segment.starts_with(':'))
            .count()
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            AppRoute::Root
            | AppRoute::Register
            | AppRoute::SignIn
            | AppRoute::ForgotPassword
            | AppRoute::ResetPassword => RouteAccess::Public,
            _ => RouteAccess::Protected,
        }
    }

    pub fn is_protected(&self) -> bool {
        self.access() == RouteAccess::Protected
    }

    /// Heading shown by views that only exist as placeholders in this client
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Root | AppRoute::Home => "Home",
            AppRoute::Register => "Register",
            AppRoute::SignIn => "Sign In",
            AppRoute::ForgotPassword => "Forgot Password",
            AppRoute::ResetPassword => "Reset Password",
            AppRoute::Series => "Series",
            AppRoute::SeriesDetails => "Series Details",
            AppRoute::Movie => "Movie Details",
            AppRoute::Upcoming => "Upcoming",
            AppRoute::Recommendations
            | AppRoute::RecommendationsByGenre
            | AppRoute::RecommendationsByLanguage => "Recommendations",
            AppRoute::Actor => "Actor",
            AppRoute::Watchlist => "Watchlist",
            AppRoute::Profile => "Profile",
            AppRoute::EditProfile => "Edit Profile",
            AppRoute::AdminDashboard => "Admin Dashboard",
        }
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = AppRoute::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), AppRoute::ALL.len());
    }

    #[test]
    fn test_auth_entry_points_are_public() {
        for route in [
            AppRoute::Register,
            AppRoute::SignIn,
            AppRoute::ForgotPassword,
            AppRoute::ResetPassword,
        ] {
            assert_eq!(route.access(), RouteAccess::Public, "{:?}", route);
        }
    }

    #[test]
    fn test_content_routes_are_protected() {
        for route in [
            AppRoute::Home,
            AppRoute::Movie,
            AppRoute::Watchlist,
            AppRoute::Profile,
            AppRoute::EditProfile,
            AppRoute::AdminDashboard,
        ] {
            assert!(route.is_protected(), "{:?}", route);
        }
    }

    #[test]
    fn test_sign_in_path_matches_route() {
        assert_eq!(AppRoute::SignIn.path(), SIGN_IN_PATH);
        assert_eq!(AppRoute::Home.path(), HOME_PATH);
    }

    #[test]
    fn test_resolve_concrete_paths() {
        assert_eq!(AppRoute::resolve("/"), Some(AppRoute::Root));
        assert_eq!(AppRoute::resolve("/signin"), Some(AppRoute::SignIn));
        assert_eq!(AppRoute::resolve("/profile/"), Some(AppRoute::Profile));
        assert_eq!(AppRoute::resolve("/series"), Some(AppRoute::Series));
        assert_eq!(AppRoute::resolve("/series/1399"), Some(AppRoute::SeriesDetails));
        assert_eq!(AppRoute::resolve("/movie/603"), Some(AppRoute::Movie));
        assert_eq!(AppRoute::resolve("/actor/6384"), Some(AppRoute::Actor));
        assert_eq!(
            AppRoute::resolve("/recommendations/28"),
            Some(AppRoute::RecommendationsByGenre)
        );
        assert_eq!(
            AppRoute::resolve("/recommendations/lang/fr"),
            Some(AppRoute::RecommendationsByLanguage)
        );
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(AppRoute::resolve("/movies"), None);
        assert_eq!(AppRoute::resolve("/movie"), None);
        assert_eq!(AppRoute::resolve("/movie/603/cast"), None);
        assert_eq!(AppRoute::resolve("/home/extra"), None);
    }

    #[test]
    fn test_every_pattern_resolves_to_its_route() {
        for route in AppRoute::ALL {
            let concrete = route
                .path()
                .split('/')
                .map(|segment| if segment.starts_with(':') { "7" } else { segment })
                .collect::<Vec<_>>()
                .join("/");
            let concrete = if concrete.is_empty() { "/".to_string() } else { concrete };
            assert_eq!(AppRoute::resolve(&concrete), Some(route), "{}", concrete);
        }
    }
}
