//! # CLI Module
//!
//! Command-line front end for the application pages. Each command opens the
//! page it needs (list or detail), renders it to the terminal, performs the
//! requested action through the page's view-model and renders again.
//!
//! ## Commands
//!
//! - [`list_applications`] - list page, sorted by name, with optional search
//! - [`deactivate_application`] - deactivate an application from the list page
//! - [`show_application`] - detail page, optionally revealing the client secret
//! - [`create_application`] - create page
//! - [`edit_application`] - edit and save an existing application
//! - [`delete_application`] - deactivate an application from its detail page
//!
//! ## Exit Status
//!
//! Request failures do not abort a command. The page reports them like it
//! would in a browser, and the process exits with status 1 once the command
//! finished if any failure was shown.
//!
//! ## Usage Patterns
//!
//! ```bash
//! devapps list --search blog
//! devapps create --name "My blog" --home-url blog.example.com --callback-url blog.example.com/oauth
//! devapps show https://api.example.com/v2/applications/abc123/ --secret
//! devapps edit https://api.example.com/v2/applications/abc123/ --name "My new blog"
//! devapps deactivate abc123 --yes
//! ```

mod detail;
mod list;
mod render;

pub use detail::EditOptions;
pub use detail::create_application;
pub use detail::delete_application;
pub use detail::edit_application;
pub use detail::show_application;
pub use list::deactivate_application;
pub use list::list_applications;
pub use render::DetailTable;
pub use render::ListTable;

use crate::{config, error, host::TerminalHost, warning};

pub(crate) const LIST_REGION: &str = "Registered applications";
pub(crate) const DETAIL_REGION: &str = "Application";

pub(crate) struct Settings {
    pub api_list_url: String,
    pub web_list_url: String,
    pub web_create_url: String,
    pub token: Option<String>,
}

pub(crate) fn settings() -> Settings {
    let result = (|| -> Result<Settings, config::ConfigError> {
        Ok(Settings {
            api_list_url: config::api_list_url()?,
            web_list_url: config::web_list_url()?,
            web_create_url: config::web_create_url()?,
            token: config::api_token(),
        })
    })();

    match result {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    }
}

/// Persists monitoring reports and sets the exit status.
pub(crate) async fn finish(host: &TerminalHost, failed: bool) {
    if let Err(e) = host.persist_reports().await {
        warning!("Cannot write error report. Err: {}", e);
    }

    if failed || host.failures() > 0 {
        std::process::exit(1);
    }
}
