//! Session context
//!
//! The browser build of the storefront kept `userId`/`token`/`isAdmin`/
//! `verified` as ad-hoc reads from local storage. Here that state is one
//! explicit object with a defined lifecycle: hydrate on app start from a
//! pluggable key-value store, clear on logout. The cart store and checkout
//! orchestrator receive it by reference and treat the user id as opaque.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Storage keys shared with the rest of the app shell
pub const KEY_USER_ID: &str = "userId";
pub const KEY_TOKEN: &str = "token";
pub const KEY_IS_ADMIN: &str = "isAdmin";
pub const KEY_VERIFIED: &str = "verified";

/// Abstraction over the client-persisted key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, used in tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }
}

/// One user session's identity, hydrated once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: Option<String>,
    pub token: Option<String>,
    pub is_admin: bool,
    pub verified: bool,
}

impl SessionContext {
    /// Read the persisted session, if any
    pub fn hydrate(store: &dyn KeyValueStore) -> Self {
        Self {
            user_id: store.get(KEY_USER_ID).filter(|v| !v.is_empty()),
            token: store.get(KEY_TOKEN).filter(|v| !v.is_empty()),
            is_admin: store
                .get(KEY_IS_ADMIN)
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            verified: store
                .get(KEY_VERIFIED)
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Persist this session
    pub fn persist(&self, store: &dyn KeyValueStore) {
        match &self.user_id {
            Some(id) => store.set(KEY_USER_ID, id),
            None => store.remove(KEY_USER_ID),
        }
        match &self.token {
            Some(token) => store.set(KEY_TOKEN, token),
            None => store.remove(KEY_TOKEN),
        }
        store.set(KEY_IS_ADMIN, if self.is_admin { "true" } else { "false" });
        store.set(KEY_VERIFIED, if self.verified { "true" } else { "false" });
    }

    /// Drop the session and wipe persisted keys (logout)
    pub fn clear(store: &dyn KeyValueStore) {
        for key in [KEY_USER_ID, KEY_TOKEN, KEY_IS_ADMIN, KEY_VERIFIED] {
            store.remove(key);
        }
    }

    /// Whether an authenticated user is present
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some() && self.token.is_some()
    }

    /// The opaque user id, or an error message suitable for the UI
    pub fn require_user_id(&self) -> Result<&str, crate::ClientError> {
        self.user_id
            .as_deref()
            .ok_or(crate::ClientError::Unauthorized)
    }
}
