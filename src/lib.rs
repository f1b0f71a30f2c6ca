//! Developer Applications Client Library
//!
//! This library provides the view-models and REST plumbing behind the pages that
//! manage registered OAuth2 API applications: a list page and a combined
//! create/edit/detail page. The view-models keep form state, track unsaved
//! changes against the last server-confirmed snapshot, and orchestrate requests
//! against a collection endpoint and its per-application detail endpoints.
//!
//! # Modules
//!
//! - `application` - The application record, its validation and wire serialization
//! - `cli` - Command-line interface implementations
//! - `client` - REST client for the applications endpoints
//! - `config` - Configuration management and environment variables
//! - `host` - Notifications, dialogs, history and monitoring collaborators
//! - `language` - User-facing message texts
//! - `message` - Expiring change messages shown after a save
//! - `page` - Page controllers binding view-models to renderers
//! - `types` - Wire and table type definitions
//! - `utils` - Utility functions and helpers
//! - `viewmodel` - List and detail view-models
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use devapps::{host::TerminalHost, viewmodel::{ApplicationsListViewModel, ListUrls}};
//!
//! #[tokio::main]
//! async fn main() -> devapps::Res<()> {
//!     devapps::config::load_env().await?;
//!     let urls = ListUrls::new(devapps::config::api_list_url()?, devapps::config::web_create_url()?);
//!     let mut list = ApplicationsListViewModel::new(urls, Arc::new(TerminalHost::new(false)));
//!     list.init().await;
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod client;
pub mod config;
pub mod host;
pub mod language;
pub mod message;
pub mod page;
pub mod types;
pub mod utils;
pub mod viewmodel;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the command-line plumbing
/// using a boxed dynamic error trait object. Library components return their
/// own error enums, which convert into this alias with `?`.
///
/// # Example
///
/// ```
/// use devapps::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching registered applications...");
/// info!("Found {} applications", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when an application was created,
/// updated or deactivated.
///
/// # Example
///
/// ```
/// success!("Application created");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// such as missing configuration.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. Request failures inside a page are not fatal and are
/// reported with [`danger!`] instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a non-fatal error message with a red cross.
///
/// # Example
///
/// ```
/// danger!("Could not save the application");
/// ```
#[macro_export]
macro_rules! danger {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "x".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("There are unsaved changes on this page.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
