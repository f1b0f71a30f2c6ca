//! Configuration management for the developer applications client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files: the API collection endpoint, the addresses of the
//! list and create pages, and an optional access token.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{
    env,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub const API_LIST_URL: &str = "DEVAPPS_API_LIST_URL";
pub const WEB_LIST_URL: &str = "DEVAPPS_WEB_LIST_URL";
pub const WEB_CREATE_URL: &str = "DEVAPPS_WEB_CREATE_URL";
pub const API_TOKEN: &str = "DEVAPPS_API_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("cannot prepare configuration directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: dotenv::Error,
    },
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist. A missing `.env` file
/// is not an error: the values may come from the process environment alone.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/devapps/.env`
/// - macOS: `~/Library/Application Support/devapps/.env`
/// - Windows: `%LOCALAPPDATA%/devapps/.env`
///
/// # Example
///
/// ```
/// use devapps::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    load_env_from(&path)
}

/// Loads the `.env` file at `path`. Only a missing file is tolerated; an
/// unreadable or malformed one is a [`ConfigError::Parse`].
pub fn load_env_from(path: &Path) -> Result<(), ConfigError> {
    // variables already set in the environment are never overridden
    match dotenv::from_path(path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("devapps/.env");
    path
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Returns the collection endpoint of the applications API.
///
/// Used to list all registered applications and to register new ones.
///
/// # Example
///
/// ```
/// let url = api_list_url()?; // e.g., "https://api.example.com/v2/applications/"
/// ```
pub fn api_list_url() -> Result<String, ConfigError> {
    required(API_LIST_URL)
}

/// Returns the address of the applications list page.
///
/// The detail page returns here after an application was deactivated or
/// the user discarded their changes.
pub fn web_list_url() -> Result<String, ConfigError> {
    required(WEB_LIST_URL)
}

/// Returns the address of the create page, `<list page>create/` unless
/// `DEVAPPS_WEB_CREATE_URL` is set.
pub fn web_create_url() -> Result<String, ConfigError> {
    if let Some(url) = optional(WEB_CREATE_URL) {
        return Ok(url);
    }

    let list = web_list_url()?;
    if list.ends_with('/') {
        Ok(format!("{}create/", list))
    } else {
        Ok(format!("{}/create/", list))
    }
}

/// Returns the access token sent as a bearer token, if configured.
///
/// # Security Note
///
/// The token grants access to the account's applications and should never
/// be exposed in logs or version control.
pub fn api_token() -> Option<String> {
    optional(API_TOKEN)
}
