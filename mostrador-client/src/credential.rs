// mostrador-client/src/credential.rs
// Bearer credentials: provider seam + JSON file storage

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the bearer token attached to API requests
///
/// Token acquisition (login, refresh) happens elsewhere; transports only
/// ask whichever provider they were built with. `None` means the request
/// goes out without an `Authorization` header.
pub trait CredentialProvider: Send + Sync + std::fmt::Debug {
    fn token(&self) -> Option<String>;
}

/// Fixed token, mainly for tests and short-lived tooling
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No credentials; requests carry no `Authorization` header
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl CredentialProvider for Anonymous {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Stored credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    /// Unix seconds; `None` means the token does not expire
    pub expires_at: Option<u64>,
}

impl Credential {
    pub fn new(token: String, expires_at: Option<u64>) -> Self {
        Self { token, expires_at }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            return now > expires_at;
        }
        false
    }
}

/// Credential storage backed by a JSON file
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a credential store at `base_path/filename`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    /// Ensure the parent directory exists
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Save a credential
    pub fn save(&self, credential: &Credential) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(credential)?;
        fs::write(&self.path, json)?;
        tracing::info!("Credential saved to {:?}", self.path);
        Ok(())
    }

    /// Load the credential; missing or unreadable files yield `None`
    pub fn load(&self) -> Option<Credential> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Check whether a credential file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the credential file
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Storage path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialProvider for CredentialStore {
    fn token(&self) -> Option<String> {
        let credential = self.load()?;
        if credential.is_expired() {
            tracing::warn!("Stored credential expired, ignoring it");
            return None;
        }
        Some(credential.token)
    }
}
