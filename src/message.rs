use std::time::Duration;

use tokio::time::Instant;

/// A short-lived status message shown next to a form after it was saved.
#[derive(Debug, Clone, Default)]
pub struct ChangeMessage {
    text: Option<String>,
    css_class: Option<String>,
    expires_at: Option<Instant>,
}

impl ChangeMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` styled with `css_class` for `timeout_ms` milliseconds.
    pub fn change_message(&mut self, text: &str, css_class: &str, timeout_ms: u64) {
        self.text = Some(text.to_string());
        self.css_class = Some(css_class.to_string());
        self.expires_at = Some(Instant::now() + Duration::from_millis(timeout_ms));
    }

    /// Text and style class while the message is still visible.
    pub fn current(&self) -> Option<(&str, &str)> {
        match (&self.text, &self.css_class, self.expires_at) {
            (Some(text), Some(class), Some(expires_at)) if Instant::now() < expires_at => {
                Some((text.as_str(), class.as_str()))
            }
            _ => None,
        }
    }
}
