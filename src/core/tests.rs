#[cfg(test)]
mod tests {
    use crate::core::{
        AppRoute, Credential, GuardOutcome, MemoryStorage, PersistedSession, Role, SessionStore,
        SIGN_IN_PATH, User, UserPatch, guard,
    };

    fn viewer() -> User {
        User {
            id: "6512".to_string(),
            username: "cinephile".to_string(),
            email: "cinephile@example.com".to_string(),
            role: Role::User,
            profile_pic_url: None,
        }
    }

    #[test]
    fn test_reload_restores_signed_in_session() {
        let mut first = SessionStore::hydrate(MemoryStorage::new());
        first.login(viewer(), Credential::new("bearer-1"));

        // A reload reads back the same storage contents
        let saved = first.storage().value().unwrap().to_string();
        let reloaded = SessionStore::hydrate(MemoryStorage::with_value(saved));

        assert_eq!(reloaded.session(), first.session());
        assert_eq!(guard(reloaded.session()), GuardOutcome::Render);
    }

    #[test]
    fn test_reload_after_logout_is_signed_out() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.login(viewer(), Credential::new("bearer-1"));
        store.logout();

        let reloaded = SessionStore::hydrate(store.storage().clone());
        assert!(!reloaded.is_signed_in());
        assert_eq!(guard(reloaded.session()), GuardOutcome::Redirect("/signin"));
    }

    #[test]
    fn test_reload_keeps_profile_update() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.login(viewer(), Credential::new("bearer-1"));
        store.update_user(UserPatch::default().profile_pic_url("https://img.example/me.png"));

        let reloaded = SessionStore::hydrate(store.storage().clone());
        let user = reloaded.user().unwrap();
        assert_eq!(
            user.profile_pic_url.as_deref(),
            Some("https://img.example/me.png")
        );
        assert_eq!(reloaded.credential().unwrap().as_str(), "bearer-1");
    }

    #[test]
    fn test_persisted_record_layout() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.login(viewer(), Credential::new("bearer-1"));

        let json: serde_json::Value =
            serde_json::from_str(store.storage().value().unwrap()).unwrap();
        assert_eq!(json["token"], "bearer-1");
        assert_eq!(json["user"]["username"], "cinephile");
        assert_eq!(json["user"]["role"], "user");
        assert!(json["user"].get("profilePic").is_none());

        let record: PersistedSession = serde_json::from_value(json).unwrap();
        assert_eq!(record.user, viewer());
    }

    #[test]
    fn test_protected_urls_redirect_when_signed_out() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());

        let urls = [
            "/home",
            "/series",
            "/series/1399",
            "/movie/603",
            "/upcoming",
            "/recommendations",
            "/recommendations/28",
            "/recommendations/lang/ko",
            "/actor/6384",
            "/watchlist",
            "/profile",
            "/edit-profile",
            "/admin-dashboard",
        ];
        for url in urls {
            let route = AppRoute::resolve(url).expect("known url");
            assert!(route.is_protected(), "{} should be protected", url);
            assert_eq!(guard(store.session()), GuardOutcome::Redirect(SIGN_IN_PATH));
        }

        store.login(viewer(), Credential::new("t"));
        for url in urls {
            assert!(AppRoute::resolve(url).is_some_and(|route| route.is_protected()));
            assert_eq!(guard(store.session()), GuardOutcome::Render);
        }
    }

    #[test]
    fn test_auth_urls_stay_public() {
        for url in ["/signin", "/register", "/forgot-password", "/reset-password"] {
            let route = AppRoute::resolve(url).expect("known url");
            assert!(!route.is_protected(), "{} should be public", url);
        }
    }

    #[test]
    fn test_guard_follows_login_and_logout() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        assert_eq!(guard(store.session()), GuardOutcome::Redirect("/signin"));

        store.login(viewer(), Credential::new("t"));
        assert_eq!(guard(store.session()), GuardOutcome::Render);

        store.logout();
        assert_eq!(guard(store.session()), GuardOutcome::Redirect("/signin"));
    }
}
