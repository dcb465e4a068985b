//! Pluggable persistence for the access token
//!
//! The session client keeps the authoritative token in memory and mirrors
//! it into a [`TokenStore`] so a restarted process can resume without a
//! fresh login. The default store is a plain in-memory cell; callers that
//! want real persistence (keychain, file, browser storage bridge)
//! implement the trait themselves.

use parking_lot::RwLock;

/// Storage hook for the current access token.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a freshly issued token.
    fn save(&self, token: &str);

    /// Drop the persisted token (logout, session expiry).
    fn clear(&self);
}

/// Token store that lives and dies with the process.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn save(&self, token: &str) {
        *self.token.write() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear_round_trip() {
        let store = InMemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.save("abc");
        assert_eq!(store.load(), Some("abc".to_owned()));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
