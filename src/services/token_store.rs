// ============================================================================
// TOKEN STORE - Where the bearer token lives between page loads
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};

use crate::error::ApiError;
use crate::utils::constants::TOKEN_STORAGE_KEY;

/// Persisted session token: read on startup, written on login, cleared on
/// logout or when the token cannot be decoded.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), ApiError>;
    fn clear(&self);
}

/// Browser local storage, key `token`.
///
/// The value is stored raw (not JSON-encoded) so tokens written by other
/// clients of the same backend stay readable.
#[derive(Clone, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    pub fn new() -> Self {
        Self
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        let raw = LocalStorage::raw();
        match raw.get_item(TOKEN_STORAGE_KEY) {
            Ok(Some(token)) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(_) => {
                log::warn!("⚠️ [STORE] localStorage unavailable while reading token");
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        LocalStorage::raw()
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|_| ApiError::Storage("could not write token to localStorage".to_string()))?;
        log::info!("💾 [STORE] Token saved");
        Ok(())
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
        log::info!("🗑️ [STORE] Token removed");
    }
}

/// In-memory store, shared between clones
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.save("abc.def.ghi").unwrap();
        let shared = store.clone();
        assert_eq!(shared.load().as_deref(), Some("abc.def.ghi"));

        shared.clear();
        assert_eq!(store.load(), None);
    }
}
