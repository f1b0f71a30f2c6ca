use std::sync::Arc;

use crate::{
    host::{Host, TerminalHost},
    page::ApplicationsList,
    utils,
    viewmodel::ListUrls,
    warning,
};

use super::{LIST_REGION, ListTable, finish, settings};

pub async fn list_applications(search: Option<String>) {
    let settings = settings();
    let host = Arc::new(TerminalHost::new(false));

    let renderer = ListTable::new(search).with_spinner(utils::spinner("Fetching applications..."));
    ApplicationsList::new(
        LIST_REGION,
        ListUrls::new(settings.api_list_url, settings.web_create_url),
        settings.token,
        Arc::clone(&host) as Arc<dyn Host>,
        renderer,
    )
    .await;

    finish(&host, false).await;
}

pub async fn deactivate_application(client_id: String, yes: bool) {
    let settings = settings();
    let host = Arc::new(TerminalHost::new(yes));

    let renderer = ListTable::new(None).with_spinner(utils::spinner("Fetching applications..."));
    let mut page = ApplicationsList::new(
        LIST_REGION,
        ListUrls::new(settings.api_list_url, settings.web_create_url),
        settings.token,
        Arc::clone(&host) as Arc<dyn Host>,
        renderer,
    )
    .await;

    let Some(app) = page.view_model.find_by_client_id(&client_id).cloned() else {
        warning!("No application with client ID {}", client_id);
        finish(&host, true).await;
        return;
    };

    page.view_model.delete_application(&app).await;
    page.refresh();

    finish(&host, false).await;
}
