use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::client::RequestError;

/// Request body sent on create and update.
///
/// Absent values are omitted from the JSON instead of being sent as `null`.
/// Equality is field-by-field, which is what dirty tracking compares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Context attached to every monitoring report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    pub url: String,
    pub status: Option<u16>,
    pub error: String,
}

impl ErrorContext {
    pub fn new(url: &str, error: &RequestError) -> Self {
        Self {
            url: url.to_string(),
            status: error.status(),
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub message: String,
    pub context: ErrorContext,
}

#[derive(Tabled)]
pub struct ApplicationTableRow {
    pub name: String,
    pub client_id: String,
    pub home_url: String,
}

#[derive(Tabled)]
pub struct FieldTableRow {
    pub field: String,
    pub value: String,
}
