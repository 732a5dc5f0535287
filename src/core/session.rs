//! Session store: the signed-in identity and its bearer credential
//!
//! The store is generic over a [`SessionStorage`] backend so it can be driven by
//! `localStorage` in the browser and by [`MemoryStorage`] in tests and on the
//! server. It exposes exactly three mutations: [`SessionStore::login`],
//! [`SessionStore::logout`] and [`SessionStore::update_user`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage key of the persisted session record
pub const SESSION_STORAGE_KEY: &str = "reelbase_session";

/// Account role as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// User profile as returned by the backend and kept in the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(
        rename = "profilePic",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_pic_url: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Opaque bearer token issued by the backend at login
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Current authentication state.
///
/// A user without a credential (or the reverse) cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    SignedOut,
    SignedIn { user: User, credential: Credential },
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::SignedIn { user, .. } => Some(user),
            Session::SignedOut => None,
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Session::SignedIn { credential, .. } => Some(credential),
            Session::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }
}

/// Partial replacement for the fields of a [`User`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    /// `Some(None)` removes the picture
    pub profile_pic_url: Option<Option<String>>,
}

impl UserPatch {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn profile_pic_url(mut self, url: impl Into<String>) -> Self {
        self.profile_pic_url = Some(Some(url.into()));
        self
    }

    pub fn clear_profile_pic(mut self) -> Self {
        self.profile_pic_url = Some(None);
        self
    }

    fn apply(self, user: &mut User) {
        if let Some(id) = self.id {
            user.id = id;
        }
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(url) = self.profile_pic_url {
            user.profile_pic_url = url;
        }
    }
}

impl From<User> for UserPatch {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            username: Some(user.username),
            email: Some(user.email),
            role: Some(user.role),
            profile_pic_url: Some(user.profile_pic_url),
        }
    }
}

/// Durable form of a signed-in session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: User,
    pub token: Credential,
}

/// Session storage error types
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Failed to read session: {0}")]
    Read(String),

    #[error("Failed to write session: {0}")]
    Write(String),

    #[error("Failed to encode session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable client-side storage holding at most one serialized session record
pub trait SessionStorage {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&mut self, value: &str) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// In-process storage used on the server and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    value: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.value = None;
        Ok(())
    }
}

/// Single source of truth for who is signed in
#[derive(Debug)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Build the store from whatever the storage holds.
    ///
    /// A missing, unreadable or malformed record starts the store signed out.
    /// The stored credential is not checked against the backend.
    pub fn hydrate(mut storage: S) -> Self {
        let session = match storage.read() {
            Ok(Some(raw)) => match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(record) => Session::SignedIn {
                    user: record.user,
                    credential: record.token,
                },
                Err(e) => {
                    tracing::warn!("Discarding malformed session record: {}", e);
                    if let Err(e) = storage.clear() {
                        tracing::warn!("Failed to remove malformed session record: {}", e);
                    }
                    Session::SignedOut
                }
            },
            Ok(None) => Session::SignedOut,
            Err(e) => {
                tracing::warn!("Session storage unreadable, starting signed out: {}", e);
                Session::SignedOut
            }
        };

        Self { session, storage }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.session.credential()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the session with a freshly authenticated identity
    pub fn login(&mut self, user: User, credential: Credential) {
        self.session = Session::SignedIn { user, credential };
        self.persist();
    }

    /// Drop the session and its persisted record. Safe to call when signed out.
    pub fn logout(&mut self) {
        self.session = Session::SignedOut;
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
    }

    /// Merge `patch` into the current user and re-persist. The credential is
    /// left untouched; nothing happens while signed out.
    pub fn update_user(&mut self, patch: impl Into<UserPatch>) {
        match &mut self.session {
            Session::SignedIn { user, .. } => patch.into().apply(user),
            Session::SignedOut => {
                tracing::debug!("Ignoring user update while signed out");
                return;
            }
        }
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!("Failed to persist session: {}", e);
        }
    }

    fn try_persist(&mut self) -> Result<(), StorageError> {
        let Session::SignedIn { user, credential } = &self.session else {
            return self.storage.clear();
        };
        let record = PersistedSession {
            user: user.clone(),
            token: credential.clone(),
        };
        let raw = serde_json::to_string(&record)?;
        self.storage.write(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "64b7f0c2a1".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::User,
            profile_pic_url: None,
        }
    }

    fn persisted(user: &User, token: &str) -> String {
        serde_json::to_string(&PersistedSession {
            user: user.clone(),
            token: Credential::new(token),
        })
        .unwrap()
    }

    /// Storage whose reads and writes always fail
    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn read(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("quota".to_string()))
        }

        fn write(&mut self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota".to_string()))
        }

        fn clear(&mut self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_login_sets_session_and_storage() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        let user = sample_user();

        store.login(user.clone(), Credential::new("tok-1"));

        assert_eq!(store.user(), Some(&user));
        assert_eq!(store.credential(), Some(&Credential::new("tok-1")));

        let raw = store.storage().value().expect("record written");
        let record: PersistedSession = serde_json::from_str(raw).unwrap();
        assert_eq!(record.user, user);
        assert_eq!(record.token, Credential::new("tok-1"));
    }

    #[test]
    fn test_login_replaces_previous_session() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.login(sample_user(), Credential::new("first"));

        let other = User {
            id: "2".to_string(),
            username: "grace".to_string(),
            email: "grace@example.com".to_string(),
            role: Role::Admin,
            profile_pic_url: Some("https://img.example/g.png".to_string()),
        };
        store.login(other.clone(), Credential::new("second"));

        assert_eq!(store.user(), Some(&other));
        assert_eq!(store.credential().map(Credential::as_str), Some("second"));
    }

    #[test]
    fn test_logout_clears_session_and_storage() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.login(sample_user(), Credential::new("tok"));

        store.logout();

        assert_eq!(store.session(), &Session::SignedOut);
        assert!(store.user().is_none());
        assert!(store.credential().is_none());
        assert!(store.storage().value().is_none());
    }

    #[test]
    fn test_logout_when_signed_out_is_noop() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.logout();
        store.logout();

        assert!(!store.is_signed_in());
        assert!(store.storage().value().is_none());
    }

    #[test]
    fn test_update_user_keeps_credential() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.login(sample_user(), Credential::new("tok"));

        store.update_user(UserPatch::default().username("ada.l"));

        let user = store.user().unwrap();
        assert_eq!(user.username, "ada.l");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(store.credential(), Some(&Credential::new("tok")));

        let record: PersistedSession =
            serde_json::from_str(store.storage().value().unwrap()).unwrap();
        assert_eq!(record.user.username, "ada.l");
        assert_eq!(record.token, Credential::new("tok"));
    }

    #[test]
    fn test_update_user_with_full_record_replaces_fields() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.login(sample_user(), Credential::new("tok"));

        let refreshed = User {
            profile_pic_url: Some("https://img.example/a.png".to_string()),
            role: Role::Admin,
            ..sample_user()
        };
        store.update_user(refreshed.clone());

        assert_eq!(store.user(), Some(&refreshed));
        assert_eq!(store.credential(), Some(&Credential::new("tok")));
    }

    #[test]
    fn test_update_user_with_full_record_drops_removed_picture() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        let with_picture = User {
            profile_pic_url: Some("https://img.example/old.png".to_string()),
            ..sample_user()
        };
        store.login(with_picture, Credential::new("tok"));

        store.update_user(sample_user());

        assert_eq!(store.user(), Some(&sample_user()));
        let record: PersistedSession =
            serde_json::from_str(store.storage().value().unwrap()).unwrap();
        assert_eq!(record.user.profile_pic_url, None);
    }

    #[test]
    fn test_patch_without_picture_keeps_it() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        let with_picture = User {
            profile_pic_url: Some("https://img.example/a.png".to_string()),
            ..sample_user()
        };
        store.login(with_picture, Credential::new("tok"));

        store.update_user(UserPatch::default().username("ada.l"));
        assert_eq!(
            store.user().and_then(|u| u.profile_pic_url.as_deref()),
            Some("https://img.example/a.png")
        );

        store.update_user(UserPatch::default().clear_profile_pic());
        assert_eq!(store.user().and_then(|u| u.profile_pic_url.clone()), None);
    }

    #[test]
    fn test_update_user_when_signed_out_does_nothing() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());

        store.update_user(sample_user());

        assert!(!store.is_signed_in());
        assert!(store.storage().value().is_none());
    }

    #[test]
    fn test_hydrate_without_record_is_signed_out() {
        let store = SessionStore::hydrate(MemoryStorage::new());
        assert_eq!(store.session(), &Session::SignedOut);
    }

    #[test]
    fn test_hydrate_with_record_signs_in() {
        let user = sample_user();
        let store = SessionStore::hydrate(MemoryStorage::with_value(persisted(&user, "saved")));

        assert_eq!(
            store.session(),
            &Session::SignedIn {
                user,
                credential: Credential::new("saved"),
            }
        );
    }

    #[test]
    fn test_hydrate_with_malformed_record_discards_it() {
        let store = SessionStore::hydrate(MemoryStorage::with_value(r#"{"user":{"id":1}}"#));

        assert!(!store.is_signed_in());
        assert!(store.storage().value().is_none());
    }

    #[test]
    fn test_hydrate_with_token_but_no_user_is_signed_out() {
        let store = SessionStore::hydrate(MemoryStorage::with_value(r#"{"token":"abc"}"#));
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_hydrate_with_unreadable_storage_is_signed_out() {
        let store = SessionStore::hydrate(BrokenStorage);
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_login_survives_write_failure() {
        let mut store = SessionStore::hydrate(BrokenStorage);

        store.login(sample_user(), Credential::new("tok"));
        assert!(store.is_signed_in());

        store.logout();
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_user_decodes_backend_shape() {
        let json = r#"{
            "_id": "650a",
            "username": "neo",
            "email": "neo@example.com",
            "profilePic": "https://img.example/neo.jpg"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "650a");
        assert_eq!(user.role, Role::User);
        assert_eq!(
            user.profile_pic_url.as_deref(),
            Some("https://img.example/neo.jpg")
        );
    }

    #[test]
    fn test_admin_role_decodes() {
        let json = r#"{"id":"1","username":"root","email":"r@x.io","role":"admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.role.as_str(), "admin");
    }

    #[test]
    fn test_credential_debug_hides_token() {
        let credential = Credential::new("super-secret-token");
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("super-secret-token"));
        assert_eq!(credential.bearer(), "Bearer super-secret-token");
    }
}
