//! Durable mirror of the token pair.
//!
//! The browser app keeps the two token strings in localStorage so a page
//! reload can restore the session without re-authenticating. The store writes
//! the mirror on login success and removes it on logout; the watcher reads it
//! during hydration. Tests swap in [`MemoryTokenStore`].

use std::cell::RefCell;

/// localStorage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// localStorage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Token pair as persisted. The refresh token is optional because the client
/// never exchanges it; it is carried for the server's benefit only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTokens {
    pub access: String,
    pub refresh: Option<String>,
}

impl StoredTokens {
    pub fn new(access: impl Into<String>, refresh: Option<String>) -> Self {
        Self {
            access: access.into(),
            refresh,
        }
    }
}

/// Durable single-slot storage for the token pair.
///
/// Writes only happen from serialized, user-initiated actions, so
/// implementations do not need any internal locking.
pub trait TokenStore {
    fn load(&self) -> Option<StoredTokens>;
    fn save(&self, tokens: &StoredTokens);
    /// Remove the persisted pair. Must be safe to call when nothing is stored.
    fn clear(&self);
}

/// In-memory slot used in tests and as a fallback where no durable storage
/// exists.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<StoredTokens>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<StoredTokens> {
        self.slot.borrow().clone()
    }

    fn save(&self, tokens: &StoredTokens) {
        *self.slot.borrow_mut() = Some(tokens.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.load(), None);

        let tokens = StoredTokens::new("access", Some("refresh".to_string()));
        store.save(&tokens);
        assert_eq!(store.load(), Some(tokens));

        store.clear();
        assert_eq!(store.load(), None);
        // clearing an empty slot is a no-op
        store.clear();
        assert_eq!(store.load(), None);
    }
}
