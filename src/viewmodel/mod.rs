//! # View-Models
//!
//! State containers behind the two application pages.
//!
//! - [`ApplicationsListViewModel`] - every registered application, with
//!   deactivation from the list.
//! - [`ApplicationDetailViewModel`] - one application on a combined
//!   create/edit/detail page, with unsaved-change tracking.
//!
//! Both keep their state in plain fields and derive everything else
//! (`dirty`, `is_create_view`, sorted views) on demand. Every mutation bumps a
//! revision on a [`tokio::sync::watch`] channel; page controllers subscribe to
//! it and re-render when the revision moved.
//!
//! Failures never escape an operation. They are shown once through the
//! [`Host`](crate::host::Host) and reported to monitoring, and the view-model
//! stays usable afterwards.

mod detail;
mod list;

pub use detail::ApplicationDetailViewModel;
pub use detail::DetailUrls;
pub use detail::Phase;
pub use list::ApplicationsListViewModel;
pub use list::ListUrls;

use tokio::sync::watch;

/// Revision counter shared between a view-model and its subscribers.
#[derive(Debug)]
pub(crate) struct Changes {
    tx: watch::Sender<u64>,
}

impl Changes {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx }
    }

    pub(crate) fn notify(&self) {
        self.tx.send_modify(|revision| *revision += 1);
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}
