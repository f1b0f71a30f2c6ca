use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

use crate::application::ApplicationData;

/// Prefixes `http://` to a non-empty URL that carries no http(s) scheme.
pub fn ensure_http(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    if value.is_empty() || lower.starts_with("http://") || lower.starts_with("https://") {
        value.to_string()
    } else {
        format!("http://{}", value)
    }
}

/// True for absolute http(s) URLs with a host.
pub fn is_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

pub fn sort_applications_by_name(apps: &mut [&ApplicationData]) {
    apps.sort_by(|a, b| {
        let an = a.name().unwrap_or_default().to_lowercase();
        let bn = b.name().unwrap_or_default().to_lowercase();
        an.cmp(&bn)
    });
}

pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
