//! Session context shared with the whole view tree
//!
//! Wraps the core [`SessionStore`] in a signal so every view that reads the
//! session re-renders on login, logout and profile updates. The store is
//! hydrated from `localStorage` when the context is created, which happens
//! before the router renders its first view.

use leptos::prelude::*;

use crate::core::{
    Credential, GuardOutcome, Session, SessionStorage, SessionStore, StorageError, User,
    UserPatch, guard,
};
#[cfg(not(feature = "ssr"))]
use crate::core::SESSION_STORAGE_KEY;

/// `window.localStorage`, always empty on the server
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SessionStorage for BrowserStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            local_storage()?
                .get_item(SESSION_STORAGE_KEY)
                .map_err(|e| StorageError::Read(format!("{:?}", e)))
        }
        #[cfg(feature = "ssr")]
        {
            Ok(None)
        }
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            local_storage()?
                .set_item(SESSION_STORAGE_KEY, value)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }
        #[cfg(feature = "ssr")]
        {
            let _ = value;
            Ok(())
        }
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            local_storage()?
                .remove_item(SESSION_STORAGE_KEY)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }
        #[cfg(feature = "ssr")]
        {
            Ok(())
        }
    }
}

/// Session context providing the current identity and the three mutations
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
}

impl SessionContext {
    /// Current session (tracked)
    pub fn session(&self) -> Session {
        self.store.with(|store| store.session().clone())
    }

    /// Current user (tracked)
    pub fn user(&self) -> Option<User> {
        self.store.with(|store| store.user().cloned())
    }

    /// Check if a user is signed in (tracked)
    pub fn is_signed_in(&self) -> bool {
        self.store.with(|store| store.is_signed_in())
    }

    /// Bearer credential for backend calls.
    /// Uses with_untracked() since this is read from event handlers and tasks.
    pub fn credential(&self) -> Option<Credential> {
        self.store.with_untracked(|store| store.credential().cloned())
    }

    /// Guard decision for the current session (tracked)
    pub fn guard(&self) -> GuardOutcome {
        self.store.with(|store| guard(store.session()))
    }

    /// Guard decision that only notifies dependents when it flips between
    /// render and redirect, so profile patches leave guarded views mounted
    pub fn guard_outcome(&self) -> Memo<GuardOutcome> {
        let ctx = *self;
        Memo::new(move |_| ctx.guard())
    }

    pub fn login(&self, user: User, credential: Credential) {
        leptos::logging::log!("Signed in as {}", user.username);
        self.store.update(|store| store.login(user, credential));
    }

    pub fn logout(&self) {
        self.store.update(|store| store.logout());
    }

    pub fn update_user(&self, patch: impl Into<UserPatch>) {
        let patch = patch.into();
        self.store.update(|store| store.update_user(patch));
    }
}

/// Hydrate the session and provide it to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        store: RwSignal::new(SessionStore::hydrate(BrowserStorage)),
    };
    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
