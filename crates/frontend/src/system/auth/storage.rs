use std::sync::{Arc, Mutex};
use web_sys::window;

/// Where the session token lives.
///
/// The controller is the only writer; everything else reads.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

/// Token persisted in `localStorage` under a single key
#[derive(Clone, Debug)]
pub struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for LocalStorageSession {
    /// Get token from localStorage
    fn token(&self) -> Option<String> {
        get_local_storage()?
            .get_item(&self.key)
            .ok()?
            .filter(|t| !t.is_empty())
    }

    /// Save token to localStorage
    fn set_token(&self, token: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("localStorage rejected the session token");
                }
            }
            None => log::warn!("localStorage is not available, session will not persist"),
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// In-process session, lost on reload
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    token: Arc<Mutex<Option<String>>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_lifecycle() {
        let session = MemorySession::default();
        assert_eq!(session.token(), None);

        session.set_token("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));

        session.set_token("def");
        assert_eq!(session.token().as_deref(), Some("def"));

        session.clear_token();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_memory_session_clones_share_token() {
        let session = MemorySession::with_token("abc");
        let other = session.clone();
        other.clear_token();
        assert_eq!(session.token(), None);
    }
}
