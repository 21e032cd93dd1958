//! Settings loaded from the environment
//!
//! An explicit struct passed into constructors rather than a process-wide
//! singleton. Secrets stay optional at load time; code paths that need them
//! fail with a typed configuration error instead of defaulting to empty
//! strings.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable for the data directory (default: ~/.skillet)
pub const HOME_ENV: &str = "SKILLET_HOME";

/// Environment variable for the upstream API key
pub const API_KEY_ENV: &str = "SKILLET_API_KEY";

/// Environment variable for the upstream access token (favorites only)
pub const ACCESS_TOKEN_ENV: &str = "SKILLET_ACCESS_TOKEN";

/// Environment variable overriding the upstream API base URL
pub const API_URL_ENV: &str = "SKILLET_API_URL";

pub const DEFAULT_API_URL: &str = "https://mobile.kptncook.com";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the database file and its backup copy.
    pub root: PathBuf,
    pub api_url: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
}

impl Settings {
    /// Load settings from the environment, creating the data directory if it
    /// does not exist yet.
    pub fn from_env() -> Result<Self> {
        let root = match env::var_os(HOME_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .ok_or_else(|| Error::Config("could not determine home directory".to_string()))?
                .join(".skillet"),
        };
        std::fs::create_dir_all(&root)?;

        Ok(Self {
            root,
            api_url: non_empty_var(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: non_empty_var(API_KEY_ENV),
            access_token: non_empty_var(ACCESS_TOKEN_ENV),
        })
    }

    /// The API key, or a configuration error when it is not set.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Config(format!("{} is not set", API_KEY_ENV)))
    }

    /// The access token, or a configuration error when it is not set.
    pub fn access_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .ok_or_else(|| Error::Config(format!("{} is not set", ACCESS_TOKEN_ENV)))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
