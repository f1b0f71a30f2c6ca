//! User-facing texts for the application pages.

pub const DATA_LIST_FETCH_ERROR: &str =
    "Could not retrieve the list of registered applications. Please refresh the page or contact support if the problem persists.";
pub const DATA_FETCH_ERROR: &str =
    "Could not retrieve the application data. Please refresh the page or contact support if the problem persists.";
pub const DATA_SEND_ERROR: &str =
    "Could not save the application. Please check the form and try again, or contact support if the problem persists.";
pub const DATA_UPDATED: &str = "Application data updated";
pub const CREATION_SUCCESS: &str =
    "Successfully registered new application. The client ID and secret are now available.";
pub const DEACTIVATE_CONFIRM: &str =
    "Are you sure you want to deactivate this application? This will revoke all access tokens issued for it and cannot be undone.";
pub const DEACTIVATE_ERROR: &str =
    "Could not deactivate the application. Please wait a few minutes and try again, or contact support if the problem persists.";
pub const DISCARD_UNCHANGED: &str =
    "Are you sure you want to discard your unsaved changes?";
pub const UNSAVED_CHANGES: &str = "There are unsaved changes on this page.";

pub const DEACTIVATE_TITLE: &str = "Deactivate application?";
pub const DEACTIVATE_LABEL: &str = "Deactivate";
pub const DISCARD_TITLE: &str = "Discard changes?";
pub const DISCARD_LABEL: &str = "Discard";

pub const ERROR_TITLE: &str = "Error";
pub const DELETION_TITLE: &str = "Deletion";

pub const TEXT_SUCCESS: &str = "text-success";

/// How long a success message stays visible.
pub const MESSAGE_TIMEOUT_MS: u64 = 5000;

pub fn deactivated(name: &str) -> String {
    format!("\"{}\" has been deactivated", name)
}
