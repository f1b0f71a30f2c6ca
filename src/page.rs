//! Page controllers.
//!
//! A page binds one view-model to a named region and a [`Render`]
//! implementation, runs the view-model's `init()`, and draws it. After that
//! [`refresh`](ApplicationsList::refresh) redraws only when the view-model
//! reported a change since the last draw.

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    host::Host,
    viewmodel::{ApplicationDetailViewModel, ApplicationsListViewModel, DetailUrls, ListUrls},
};

/// Draws a view-model into a region.
pub trait Render<V> {
    fn render(&mut self, region: &str, view_model: &V);
}

pub struct ApplicationsList<R> {
    pub view_model: ApplicationsListViewModel,
    region: String,
    renderer: R,
    changes: watch::Receiver<u64>,
}

impl<R: Render<ApplicationsListViewModel>> ApplicationsList<R> {
    pub async fn new(
        region: &str,
        urls: ListUrls,
        token: Option<String>,
        host: Arc<dyn Host>,
        renderer: R,
    ) -> Self {
        let view_model = ApplicationsListViewModel::new(urls, host).with_token(token);
        let changes = view_model.subscribe();
        let mut page = Self {
            view_model,
            region: region.to_string(),
            renderer,
            changes,
        };

        page.view_model.init().await;
        page.draw();
        page
    }

    /// Redraws if the view-model changed since the last draw.
    pub fn refresh(&mut self) -> bool {
        if !self.changes.has_changed().unwrap_or(false) {
            return false;
        }
        self.draw();
        true
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn draw(&mut self) {
        let _ = self.changes.borrow_and_update();
        self.renderer.render(&self.region, &self.view_model);
    }
}

pub struct ApplicationDetail<R> {
    pub view_model: ApplicationDetailViewModel,
    region: String,
    renderer: R,
    changes: watch::Receiver<u64>,
}

impl<R: Render<ApplicationDetailViewModel>> ApplicationDetail<R> {
    pub async fn new(
        region: &str,
        urls: DetailUrls,
        token: Option<String>,
        host: Arc<dyn Host>,
        renderer: R,
    ) -> Self {
        let view_model = ApplicationDetailViewModel::new(urls, host).with_token(token);
        let changes = view_model.subscribe();
        let mut page = Self {
            view_model,
            region: region.to_string(),
            renderer,
            changes,
        };

        page.view_model.init().await;
        page.draw();
        page
    }

    /// Redraws if the view-model changed since the last draw.
    pub fn refresh(&mut self) -> bool {
        if !self.changes.has_changed().unwrap_or(false) {
            return false;
        }
        self.draw();
        true
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn draw(&mut self) {
        let _ = self.changes.borrow_and_update();
        self.renderer.render(&self.region, &self.view_model);
    }
}
