use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    application::ApplicationData,
    client::ApplicationDataClient,
    host::{Confirmation, Host, Level},
    language,
    types::ErrorContext,
    utils,
};

use super::Changes;

#[derive(Debug, Clone)]
pub struct ListUrls {
    pub api_list_url: String,
    pub web_create_url: String,
}

impl ListUrls {
    pub fn new(api_list_url: impl Into<String>, web_create_url: impl Into<String>) -> Self {
        Self {
            api_list_url: api_list_url.into(),
            web_create_url: web_create_url.into(),
        }
    }
}

pub struct ApplicationsListViewModel {
    api_list_url: String,
    web_create_url: String,
    app_data: Vec<ApplicationData>,
    client: ApplicationDataClient,
    host: Arc<dyn Host>,
    changes: Changes,
}

impl ApplicationsListViewModel {
    pub fn new(urls: ListUrls, host: Arc<dyn Host>) -> Self {
        let client = ApplicationDataClient::new(urls.api_list_url.clone());
        Self {
            api_list_url: urls.api_list_url,
            web_create_url: urls.web_create_url,
            app_data: Vec::new(),
            client,
            host,
            changes: Changes::new(),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.client = self.client.with_token(token);
        self
    }

    pub fn api_list_url(&self) -> &str {
        &self.api_list_url
    }

    pub fn web_create_url(&self) -> &str {
        &self.web_create_url
    }

    /// Applications in the order the server returned them.
    pub fn app_data(&self) -> &[ApplicationData] {
        &self.app_data
    }

    /// Applications ordered by case-insensitive name.
    pub fn sorted_by_name(&self) -> Vec<&ApplicationData> {
        let mut apps: Vec<&ApplicationData> = self.app_data.iter().collect();
        utils::sort_applications_by_name(&mut apps);
        apps
    }

    pub fn find_by_client_id(&self, client_id: &str) -> Option<&ApplicationData> {
        self.app_data
            .iter()
            .find(|app| app.client_id() == Some(client_id))
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    pub async fn init(&mut self) {
        match self.client.fetch_list().await {
            Ok(data) => {
                self.app_data = data;
                self.changes.notify();
            }
            Err(e) => {
                self.host.growl(
                    language::ERROR_TITLE,
                    language::DATA_LIST_FETCH_ERROR,
                    Level::Danger,
                );
                self.host.capture_message(
                    "Error fetching list of registered applications",
                    &ErrorContext::new(&self.api_list_url, &e),
                );
            }
        }
    }

    /// Deactivates `app` after confirmation and drops it from the list once
    /// the server accepted the deletion.
    pub async fn delete_application(&mut self, app: &ApplicationData) {
        let confirmed = self.host.confirm(&Confirmation {
            title: language::DEACTIVATE_TITLE,
            message: language::DEACTIVATE_CONFIRM,
            confirm_label: language::DEACTIVATE_LABEL,
        });
        if !confirmed {
            return;
        }

        match self.client.delete_one(app).await {
            Ok(()) => {
                if let Some(pos) = self.app_data.iter().position(|a| a == app) {
                    self.app_data.remove(pos);
                }
                self.changes.notify();

                let name = app.name().unwrap_or_default();
                self.host.growl(
                    language::DELETION_TITLE,
                    &language::deactivated(name),
                    Level::Success,
                );
            }
            Err(e) => {
                self.host.growl(
                    language::ERROR_TITLE,
                    language::DEACTIVATE_ERROR,
                    Level::Danger,
                );
                self.host.capture_message(
                    "Error deactivating application",
                    &ErrorContext::new(app.api_detail_url().unwrap_or_default(), &e),
                );
            }
        }
    }
}
