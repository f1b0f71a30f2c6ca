//! The environment a page runs in.
//!
//! View-models never print, prompt or navigate on their own. They go through a
//! [`Host`], which owns transient notifications, confirmation dialogs, the
//! address bar, navigation and error monitoring. [`TerminalHost`] is the
//! implementation used by the command-line client.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::{
    danger, info, success,
    types::{ErrorContext, Report},
    warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Danger,
}

/// A yes/no question put to the user before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
}

pub trait Host: Send + Sync {
    /// Shows a transient notification.
    fn growl(&self, title: &str, message: &str, level: Level);

    /// Sends a failure report to error monitoring.
    fn capture_message(&self, message: &str, context: &ErrorContext);

    /// Asks the user to confirm; `true` means go ahead.
    fn confirm(&self, confirmation: &Confirmation) -> bool;

    /// Rewrites the current address without navigating.
    fn replace_state(&self, url: &str);

    fn visit(&self, url: &str);
}

pub struct TerminalHost {
    assume_yes: bool,
    location: Mutex<Option<String>>,
    reports: Mutex<Vec<Report>>,
    failures: AtomicUsize,
}

impl TerminalHost {
    /// With `assume_yes` every confirmation is accepted without prompting.
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            location: Mutex::new(None),
            reports: Mutex::new(Vec::new()),
            failures: AtomicUsize::new(0),
        }
    }

    pub fn location(&self) -> Option<String> {
        self.location.lock().ok().and_then(|l| l.clone())
    }

    /// Number of danger notifications shown so far.
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }

    /// Appends the collected reports to the local report log as JSON lines.
    pub async fn persist_reports(&self) -> Result<(), String> {
        self.persist_reports_to(&Self::report_path()).await
    }

    /// Appends the collected reports to the log at `path`. Existing lines are
    /// never rewritten.
    pub async fn persist_reports_to(&self, path: &Path) -> Result<(), String> {
        let reports = match self.reports.lock() {
            Ok(mut reports) => std::mem::take(&mut *reports),
            Err(e) => return Err(e.to_string()),
        };
        if reports.is_empty() {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let mut content = String::new();
        for report in &reports {
            let line = serde_json::to_string(report).map_err(|e| e.to_string())?;
            content.push_str(&line);
            content.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| e.to_string())?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| e.to_string())?;
        file.flush().await.map_err(|e| e.to_string())
    }

    pub fn report_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("devapps/reports.jsonl");
        path
    }

    fn set_location(&self, url: &str) {
        if let Ok(mut location) = self.location.lock() {
            *location = Some(url.to_string());
        }
    }
}

impl Host for TerminalHost {
    fn growl(&self, title: &str, message: &str, level: Level) {
        match level {
            Level::Success => success!("{}: {}", title, message),
            Level::Info => info!("{}: {}", title, message),
            Level::Warning => warning!("{}: {}", title, message),
            Level::Danger => {
                self.failures.fetch_add(1, Ordering::SeqCst);
                danger!("{}: {}", title, message)
            }
        }
    }

    fn capture_message(&self, message: &str, context: &ErrorContext) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(Report {
                message: message.to_string(),
                context: context.clone(),
            });
        }
    }

    fn confirm(&self, confirmation: &Confirmation) -> bool {
        warning!("{}", confirmation.title);
        println!("{}", confirmation.message);
        if self.assume_yes {
            return true;
        }

        print!("{}? [y/N] ", confirmation.confirm_label);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }

    fn replace_state(&self, url: &str) {
        self.set_location(url);
    }

    fn visit(&self, url: &str) {
        self.set_location(url);
        info!("Continue at {}", url);
    }
}
