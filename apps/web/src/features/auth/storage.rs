//! localStorage-backed token mirror. Storage failures (private browsing,
//! disabled storage) degrade to an absent mirror rather than an error; the
//! session then simply does not survive a reload.

use auth_session::storage::{StoredTokens, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<StoredTokens> {
        let storage = Self::storage()?;
        let access = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()?;
        let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten();
        Some(StoredTokens::new(access, refresh))
    }

    fn save(&self, tokens: &StoredTokens) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; session will not survive reloads");
            return;
        };
        let _ = storage.set_item(ACCESS_TOKEN_KEY, &tokens.access);
        match &tokens.refresh {
            Some(refresh) => {
                let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
            }
            None => {
                let _ = storage.remove_item(REFRESH_TOKEN_KEY);
            }
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
