//! Session Store
//!
//! Holds the authentication token and mirrors it into local storage so a
//! login survives a page reload. Absence of the storage slot means
//! "logged out".

use leptos::*;

/// Local storage key for the session token
pub const TOKEN_STORAGE_KEY: &str = "outlay_token";

/// Reactive session store, provided to the component tree via context.
///
/// The token is an opaque bearer credential; there is no expiry tracking.
/// It stays valid until the server rejects it.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Create a session seeded from the durable storage slot.
    pub fn load() -> Self {
        Self {
            token: create_rw_signal(read_stored_token()),
        }
    }

    /// Store a freshly issued token, in memory and durably.
    pub fn log_in(&self, token: String) {
        write_stored_token(&token);
        self.token.set(Some(token));
    }

    /// Clear both the in-memory token and the storage slot.
    pub fn log_out(&self) {
        clear_stored_token();
        self.token.set(None);
    }

    /// Current token, if any. Reactive read.
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }
}

/// Read the token from local storage. An empty slot counts as absent.
fn read_stored_token() -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(TOKEN_STORAGE_KEY) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
    }
    None
}

fn write_stored_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
}

fn clear_stored_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn storage() -> web_sys::Storage {
        web_sys::window().unwrap().local_storage().unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    fn login_persists_across_reload() {
        let runtime = create_runtime();

        let session = Session::load();
        session.log_in("abc123".to_string());
        assert_eq!(session.token(), Some("abc123".to_string()));

        // A fresh store simulates a page reload
        let reloaded = Session::load();
        assert_eq!(reloaded.token(), Some("abc123".to_string()));

        storage().remove_item(TOKEN_STORAGE_KEY).unwrap();
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn logout_removes_storage_slot() {
        let runtime = create_runtime();

        let session = Session::load();
        session.log_in("abc123".to_string());
        session.log_out();

        assert_eq!(session.token(), None);
        assert_eq!(storage().get_item(TOKEN_STORAGE_KEY).unwrap(), None);
        assert!(!Session::load().is_authenticated());

        runtime.dispose();
    }
}
