//! Read-only access to the persisted session token.
//!
//! The browser build of this product keeps the token in local storage under
//! a well-known key. The views only ever read it; writes belong to the
//! login flow, so the trait has no mutators. The file-backed implementation
//! lives in `praisal-client`.

/// Read-only view of the persisted session token.
pub trait TokenStore: Send + Sync {
    /// The stored session token, if one is present.
    fn token(&self) -> Option<String>;
}

/// In-memory token store for tests and embedded hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    /// A store holding the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// A store with no token.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}
