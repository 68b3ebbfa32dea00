use parking_lot::Mutex;

use super::TokenStore;

/// Process-local token store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(token.into()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> String {
        self.token.lock().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.lock() = token.to_string();
    }

    fn remove_token(&self) {
        self.token.lock().clear();
    }
}
