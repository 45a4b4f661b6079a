//! # Portal Configuration
//!
//! Loaded from environment variables, then overridden by command-line
//! flags. Validated before any client is built so a bad setting fails fast.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PORTAL_API_URL` | `http://localhost:5000` |
//! | `PORTAL_TIMEOUT_SECS` | `10` |
//! | `PORTAL_CREDENTIALS_FILE` | `$HOME/.ev-admin/credentials.json` |
//! | `PORTAL_LOG_DIR` | unset (stderr only) |
//! | `RUST_LOG` | `portal=info,warn` |

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::{get_env_opt, get_env_or, get_env_parse};
use reqwest::Url;
use thiserror::Error;

use crate::services::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub const DEFAULT_LOG_LEVEL: &str = "portal=info,warn";

const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] lib_utils::envs::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Backend address, without the `/api` prefix.
    pub api_base_url: String,

    /// Per-request timeout, refresh calls included.
    pub timeout: Duration,

    /// Where the session survives between invocations.
    pub credentials_file: PathBuf,

    /// Daily-rotated log files go here when set.
    pub log_dir: Option<PathBuf>,

    /// `EnvFilter` directive.
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            credentials_file: default_credentials_file(),
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl PortalConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout = match get_env_opt("PORTAL_TIMEOUT_SECS") {
            Some(_) => Duration::from_secs(get_env_parse::<u64>("PORTAL_TIMEOUT_SECS")?),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_base_url: get_env_or("PORTAL_API_URL", DEFAULT_BASE_URL),
            timeout,
            credentials_file: get_env_opt("PORTAL_CREDENTIALS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(default_credentials_file),
            log_dir: get_env_opt("PORTAL_LOG_DIR").map(PathBuf::from),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
        })
    }

    /// Apply command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        timeout_secs: Option<u64>,
        credentials_file: Option<PathBuf>,
    ) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = credentials_file {
            self.credentials_file = path;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| ConfigError::Invalid(format!("PORTAL_API_URL is not a valid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(
                "PORTAL_API_URL must use http or https".to_string(),
            ));
        }

        let secs = self.timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Invalid(format!(
                "PORTAL_TIMEOUT_SECS must be between 1 and {MAX_TIMEOUT_SECS}"
            )));
        }

        if self.credentials_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "PORTAL_CREDENTIALS_FILE cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_credentials_file() -> PathBuf {
    let base = get_env_opt("HOME").map(PathBuf::from).unwrap_or_default();
    base.join(".ev-admin").join("credentials.json")
}
