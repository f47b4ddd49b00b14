//! Session persistence across page reloads.
//!
//! Only the non-sensitive user record is ever written — never credential
//! material, which lives in a cookie this crate cannot read. Whatever is
//! loaded from here is a display hint; access decisions wait for
//! reconciliation against the server.

use std::cell::RefCell;

use crate::auth::User;

/// Pluggable persistence for the cached user record.
pub trait SessionCache {
    /// Previously cached user, if any.
    fn load(&self) -> Option<User>;
    /// Cache the user record.
    fn store(&self, user: &User);
    /// Drop the cached record.
    fn clear(&self);
}

impl<T: SessionCache + ?Sized> SessionCache for std::rc::Rc<T> {
    fn load(&self) -> Option<User> {
        (**self).load()
    }

    fn store(&self, user: &User) {
        (**self).store(user);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-memory cache for native consumers and tests.
#[derive(Default)]
pub struct MemoryCache {
    user: RefCell<Option<User>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for MemoryCache {
    fn load(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn store(&self, user: &User) {
        *self.user.borrow_mut() = Some(user.clone());
    }

    fn clear(&self) {
        *self.user.borrow_mut() = None;
    }
}

/// localStorage-backed cache for the browser.
#[cfg(feature = "hydrate")]
pub struct LocalStorageCache;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "studio_session_user";

#[cfg(feature = "hydrate")]
impl LocalStorageCache {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl SessionCache for LocalStorageCache {
    fn load(&self) -> Option<User> {
        let storage = Self::storage()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn store(&self, user: &User) {
        if let Some(storage) = Self::storage() {
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
