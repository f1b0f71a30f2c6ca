use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    application::ApplicationData,
    client::{ApplicationDataClient, RequestError},
    host::{Confirmation, Host, Level},
    language,
    message::ChangeMessage,
    types::{ErrorContext, SerializedApplication},
};

use super::Changes;

/// Addresses a detail page needs. Without `api_detail_url` the page is a
/// create form.
#[derive(Debug, Clone)]
pub struct DetailUrls {
    pub web_list_url: String,
    pub api_list_url: String,
    pub api_detail_url: Option<String>,
}

impl DetailUrls {
    pub fn new(
        web_list_url: impl Into<String>,
        api_list_url: impl Into<String>,
        api_detail_url: Option<String>,
    ) -> Self {
        Self {
            web_list_url: web_list_url.into(),
            api_list_url: api_list_url.into(),
            api_detail_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

pub struct ApplicationDetailViewModel {
    app_data: ApplicationData,
    original_values: SerializedApplication,
    allow_exit: bool,
    exit_guard: bool,
    show_secret: bool,
    show_messages: bool,
    api_detail_url: Option<String>,
    web_list_url: String,
    phase: Phase,
    message: ChangeMessage,
    client: ApplicationDataClient,
    host: Arc<dyn Host>,
    changes: Changes,
}

impl ApplicationDetailViewModel {
    pub fn new(urls: DetailUrls, host: Arc<dyn Host>) -> Self {
        let placeholder = ApplicationData::default();
        let original_values = placeholder.serialize();
        let api_detail_url = urls.api_detail_url.filter(|url| !url.is_empty());
        let phase = match api_detail_url {
            Some(_) => Phase::Loading,
            None => Phase::Ready,
        };

        Self {
            app_data: placeholder,
            original_values,
            allow_exit: false,
            exit_guard: false,
            show_secret: false,
            show_messages: false,
            api_detail_url,
            web_list_url: urls.web_list_url,
            phase,
            message: ChangeMessage::new(),
            client: ApplicationDataClient::new(urls.api_list_url),
            host,
            changes: Changes::new(),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.client = self.client.with_token(token);
        self
    }

    pub fn app_data(&self) -> &ApplicationData {
        &self.app_data
    }

    pub fn original_values(&self) -> &SerializedApplication {
        &self.original_values
    }

    pub fn api_detail_url(&self) -> Option<&str> {
        self.api_detail_url.as_deref()
    }

    pub fn web_list_url(&self) -> &str {
        &self.web_list_url
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn allow_exit(&self) -> bool {
        self.allow_exit
    }

    pub fn show_secret(&self) -> bool {
        self.show_secret
    }

    pub fn show_messages(&self) -> bool {
        self.show_messages
    }

    /// True while the form differs from the last state the server confirmed.
    pub fn dirty(&self) -> bool {
        self.app_data.serialize() != self.original_values
    }

    pub fn is_create_view(&self) -> bool {
        self.api_detail_url.is_none()
    }

    /// The visible success message, if it has not expired yet.
    pub fn change_message(&self) -> Option<(&str, &str)> {
        self.message.current()
    }

    /// Warning to show when the user tries to leave the page, if leaving
    /// would lose unsaved changes.
    pub fn exit_warning(&self) -> Option<&'static str> {
        if self.exit_guard && self.dirty() && !self.allow_exit {
            Some(language::UNSAVED_CHANGES)
        } else {
            None
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Applies user input to the form.
    pub fn edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ApplicationData),
    {
        f(&mut self.app_data);
        self.changes.notify();
    }

    pub async fn init(&mut self) {
        let Some(url) = self.api_detail_url.clone() else {
            return;
        };

        self.exit_guard = true;
        match self.client.fetch_one(&url).await {
            Ok(app) => {
                self.replace_app_data(app);
                self.phase = Phase::Ready;
                self.changes.notify();
            }
            Err(e) => {
                self.host
                    .growl(language::ERROR_TITLE, language::DATA_FETCH_ERROR, Level::Danger);
                self.host.capture_message(
                    "Error fetching application data",
                    &ErrorContext::new(&url, &e),
                );
            }
        }
    }

    /// Validates the form and saves it, creating or updating depending on
    /// the page mode.
    pub async fn submit(&mut self) {
        if !self.app_data.is_valid() {
            self.show_messages = true;
            self.changes.notify();
            return;
        }

        self.show_messages = false;
        if self.is_create_view() {
            self.create_application().await;
        } else {
            self.update_application().await;
        }
    }

    pub async fn update_application(&mut self) {
        // nothing to send, report the save anyway
        if !self.dirty() {
            self.show_change_message(language::DATA_UPDATED);
            return;
        }

        match self.client.update_one(&self.app_data).await {
            Ok(app) => {
                self.replace_app_data(app);
                self.show_change_message(language::DATA_UPDATED);
            }
            Err(e) => {
                let url = self.api_detail_url.clone().unwrap_or_default();
                self.report_send_error("Error updating instance", &url, &e);
            }
        }
    }

    pub async fn create_application(&mut self) {
        match self.client.create_one(&self.app_data).await {
            Ok(app) => {
                self.replace_app_data(app);
                self.show_change_message(language::CREATION_SUCCESS);

                // from here on the page acts as a detail view
                self.api_detail_url = self.app_data.api_detail_url().map(str::to_string);
                if let Some(web_detail_url) = self.app_data.web_detail_url() {
                    self.host.replace_state(web_detail_url);
                }
                self.changes.notify();
            }
            Err(e) => {
                let url = self.client.api_list_url().to_string();
                self.report_send_error("Error registering new OAuth2 application", &url, &e);
            }
        }
    }

    pub async fn delete_application(&mut self) {
        let confirmed = self.host.confirm(&Confirmation {
            title: language::DEACTIVATE_TITLE,
            message: language::DEACTIVATE_CONFIRM,
            confirm_label: language::DEACTIVATE_LABEL,
        });
        if !confirmed {
            return;
        }

        match self.client.delete_one(&self.app_data).await {
            Ok(()) => {
                self.allow_exit = true;
                self.changes.notify();
                // a deleted application must not stay reachable through history
                self.host.replace_state(&self.web_list_url);
                self.visit_list();
            }
            Err(e) => {
                self.host.growl(
                    language::ERROR_TITLE,
                    language::DEACTIVATE_ERROR,
                    Level::Danger,
                );
                let url = self.api_detail_url.clone().unwrap_or_default();
                self.host.capture_message(
                    "Error deactivating application",
                    &ErrorContext::new(&url, &e),
                );
            }
        }
    }

    pub fn visit_list(&self) {
        self.host.visit(&self.web_list_url);
    }

    /// Leaves the page, asking first if there are unsaved changes.
    pub fn cancel_change(&mut self) {
        if !self.dirty() {
            self.visit_list();
            return;
        }

        let confirmed = self.host.confirm(&Confirmation {
            title: language::DISCARD_TITLE,
            message: language::DISCARD_UNCHANGED,
            confirm_label: language::DISCARD_LABEL,
        });
        if confirmed {
            self.allow_exit = true;
            self.changes.notify();
            self.visit_list();
        }
    }

    pub fn toggle_display(&mut self) {
        self.show_secret = !self.show_secret;
        self.changes.notify();
    }

    fn replace_app_data(&mut self, app: ApplicationData) {
        self.original_values = app.serialize();
        self.app_data = app;
    }

    fn show_change_message(&mut self, text: &str) {
        self.message
            .change_message(text, language::TEXT_SUCCESS, language::MESSAGE_TIMEOUT_MS);
        self.changes.notify();
    }

    fn report_send_error(&self, message: &str, url: &str, error: &RequestError) {
        self.host
            .growl(language::ERROR_TITLE, language::DATA_SEND_ERROR, Level::Danger);
        self.host
            .capture_message(message, &ErrorContext::new(url, error));
    }
}
