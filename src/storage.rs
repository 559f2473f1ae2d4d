//! Token Storage
//!
//! The bearer token survives page reloads in `localStorage`.

use web_sys::{window, Storage};

/// Fixed `localStorage` key for the bearer token
pub const TOKEN_KEY: &str = "access-token";

pub trait TokenStore {
    /// Current token, empty when none was stored yet
    fn token(&self) -> String;
    fn set_token(&self, token: &str) -> Result<(), String>;
}

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn token(&self) -> String {
        get_local_storage()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .unwrap_or_default()
    }

    fn set_token(&self, token: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|_| "failed to write token to localStorage".to_string())
    }
}
