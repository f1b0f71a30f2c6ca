use std::sync::Arc;

use crate::{
    application::ApplicationData,
    host::{Host, TerminalHost},
    info,
    page::ApplicationDetail,
    utils,
    viewmodel::{DetailUrls, Phase},
    warning,
};

use super::{DETAIL_REGION, DetailTable, Settings, finish, settings};

/// Field values given on the command line; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub home_url: Option<String>,
    pub callback_url: Option<String>,
}

async fn open_page(
    settings: Settings,
    api_detail_url: Option<String>,
    host: &Arc<TerminalHost>,
) -> ApplicationDetail<DetailTable> {
    let renderer = match api_detail_url {
        Some(_) => DetailTable::new().with_spinner(utils::spinner("Fetching application...")),
        None => DetailTable::new(),
    };

    ApplicationDetail::new(
        DETAIL_REGION,
        DetailUrls::new(
            settings.web_list_url,
            settings.api_list_url,
            api_detail_url,
        ),
        settings.token,
        Arc::clone(host) as Arc<dyn Host>,
        renderer,
    )
    .await
}

pub async fn show_application(api_detail_url: String, secret: bool, open: bool) {
    let host = Arc::new(TerminalHost::new(false));
    let mut page = open_page(settings(), Some(api_detail_url), &host).await;
    if page.view_model.phase() != Phase::Ready {
        finish(&host, true).await;
        return;
    }

    if secret {
        page.view_model.toggle_display();
        page.refresh();
    }

    if open {
        if let Some(url) = page.view_model.app_data().web_detail_url() {
            if let Err(e) = webbrowser::open(url) {
                warning!("Cannot open browser. Open {} manually. Err: {}", url, e);
            }
        }
    }

    finish(&host, false).await;
}

pub async fn create_application(options: EditOptions) {
    let host = Arc::new(TerminalHost::new(false));
    let mut page = open_page(settings(), None, &host).await;

    page.view_model.edit(|app| apply(app, &options));
    save(&mut page).await;

    if let Some(location) = host.location() {
        info!("Application page: {}", location);
    }

    finish(&host, page.view_model.show_messages()).await;
}

pub async fn edit_application(api_detail_url: String, options: EditOptions) {
    let host = Arc::new(TerminalHost::new(false));
    let mut page = open_page(settings(), Some(api_detail_url), &host).await;
    if page.view_model.phase() != Phase::Ready {
        finish(&host, true).await;
        return;
    }

    page.view_model.edit(|app| apply(app, &options));
    save(&mut page).await;

    if let Some(warning) = page.view_model.exit_warning() {
        warning!("{}", warning);
    }

    finish(&host, page.view_model.show_messages()).await;
}

pub async fn delete_application(api_detail_url: String, yes: bool) {
    let host = Arc::new(TerminalHost::new(yes));
    let mut page = open_page(settings(), Some(api_detail_url), &host).await;
    if page.view_model.phase() != Phase::Ready {
        finish(&host, true).await;
        return;
    }

    page.view_model.delete_application().await;
    page.refresh();

    finish(&host, false).await;
}

async fn save(page: &mut ApplicationDetail<DetailTable>) {
    let pb = utils::spinner("Saving application...");
    page.view_model.submit().await;
    pb.finish_and_clear();
    page.refresh();
}

fn apply(app: &mut ApplicationData, options: &EditOptions) {
    if let Some(name) = &options.name {
        app.set_name(name.as_str());
    }
    if let Some(description) = &options.description {
        app.set_description(description.as_str());
    }
    if let Some(url) = &options.home_url {
        app.set_home_url(url);
    }
    if let Some(url) = &options.callback_url {
        app.set_callback_url(url);
    }
}
