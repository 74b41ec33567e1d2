//! File-backed session-token persistence.
//!
//! Stands in for the browser's local storage: one opaque string at a
//! well-known per-user path, read by every authenticated request. The views
//! read through `praisal_core::TokenStore`; writes are reserved for the
//! login flow (in this workspace, the CLI's `session` commands).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use praisal_core::TokenStore;

use crate::error::{Error, Result};

/// File-backed token store.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// The store at the well-known per-user location,
    /// `<config-dir>/praisal/session-token`.
    pub fn default_path() -> Result<Self> {
        let dir = dirs::config_dir().ok_or(Error::NoConfigDir)?;
        Ok(Self::at(dir.join("praisal").join("session-token")))
    }

    /// A store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the token lives in.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a token, creating parent directories as needed.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token.trim())?;
        Ok(())
    }

    /// Remove the stored token. Clearing an absent token is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}
