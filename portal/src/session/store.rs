//! # Credential Storage
//!
//! The client persists exactly three values: the access token, the refresh
//! token and the serialized profile of the signed-in administrator. Storage
//! is injected behind [`CredentialStore`] so the request pipeline can be
//! driven against memory in tests and against a JSON file from the CLI.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};
use shared::TokenPair;

use crate::core::error::{ApiError, Result};

/// Key of a persisted credential value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CredentialKey {
    AccessToken,
    RefreshToken,
    User,
}

impl CredentialKey {
    pub const ALL: [CredentialKey; 3] = [
        CredentialKey::AccessToken,
        CredentialKey::RefreshToken,
        CredentialKey::User,
    ];

    /// Name under which the value is persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::AccessToken => "accessToken",
            CredentialKey::RefreshToken => "refreshToken",
            CredentialKey::User => "user",
        }
    }
}

/// Storage for session credentials.
///
/// Implementations must be cheap to call from async code: no method may
/// block on the network.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: CredentialKey) -> Result<Option<String>>;

    fn set(&self, key: CredentialKey, value: &str) -> Result<()>;

    fn remove(&self, key: CredentialKey) -> Result<()>;

    /// Remove every credential value.
    fn clear(&self) -> Result<()> {
        for key in CredentialKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }

    fn access_token(&self) -> Result<Option<String>> {
        self.get(CredentialKey::AccessToken)
    }

    fn refresh_token(&self) -> Result<Option<String>> {
        self.get(CredentialKey::RefreshToken)
    }

    /// Store both halves of a freshly issued token pair.
    fn store_tokens(&self, tokens: &TokenPair) -> Result<()> {
        self.set(CredentialKey::AccessToken, &tokens.access_token)?;
        self.set(CredentialKey::RefreshToken, &tokens.refresh_token)
    }
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: RwLock<HashMap<CredentialKey, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a token pair, as if a login had happened.
    pub fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.write();
            values.insert(CredentialKey::AccessToken, access_token.to_string());
            values.insert(CredentialKey::RefreshToken, refresh_token.to_string());
        }
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: CredentialKey) -> Result<Option<String>> {
        Ok(self.values.read().get(&key).cloned())
    }

    fn set(&self, key: CredentialKey, value: &str) -> Result<()> {
        self.values.write().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: CredentialKey) -> Result<()> {
        self.values.write().remove(&key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.values.write().clear();
        Ok(())
    }
}

/// JSON file holding the credential values, rewritten on every change.
///
/// A missing file is an empty store. The file is replaced through a
/// temporary sibling so a crash never leaves half-written JSON behind.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileCredentialStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                ApiError::Storage(format!("{} is not a credential file: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(ApiError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::debug!(path = %path.display(), entries = values.len(), "Credential file opened");
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ApiError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let raw = serde_json::to_string_pretty(values)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                ApiError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: CredentialKey) -> Result<Option<String>> {
        Ok(self.values.lock().get(key.as_str()).cloned())
    }

    fn set(&self, key: CredentialKey, value: &str) -> Result<()> {
        let mut values = self.values.lock();
        values.insert(key.as_str().to_string(), value.to_string());
        self.persist(&values)
    }

    fn remove(&self, key: CredentialKey) -> Result<()> {
        let mut values = self.values.lock();
        if values.remove(key.as_str()).is_some() {
            self.persist(&values)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut values = self.values.lock();
        values.clear();
        self.persist(&values)
    }
}
