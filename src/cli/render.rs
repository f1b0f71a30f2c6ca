use indicatif::ProgressBar;
use tabled::Table;

use crate::{
    application::ApplicationData,
    info,
    page::Render,
    success,
    types::{ApplicationTableRow, FieldTableRow},
    viewmodel::{ApplicationDetailViewModel, ApplicationsListViewModel, Phase},
    warning,
};

const HIDDEN_SECRET: &str = "********";

/// Draws the list page as a table, optionally filtered by name.
pub struct ListTable {
    search: Option<String>,
    spinner: Option<ProgressBar>,
}

impl ListTable {
    pub fn new(search: Option<String>) -> Self {
        Self {
            search: search.map(|s| s.to_lowercase()),
            spinner: None,
        }
    }

    /// Spinner cleared by the first draw.
    pub fn with_spinner(mut self, spinner: ProgressBar) -> Self {
        self.spinner = Some(spinner);
        self
    }

    fn matches(&self, app: &ApplicationData) -> bool {
        match &self.search {
            Some(term) => app
                .name()
                .unwrap_or_default()
                .to_lowercase()
                .contains(term.as_str()),
            None => true,
        }
    }

    /// Shown instead of the table when no row is left to draw.
    pub fn empty_notice(&self, view_model: &ApplicationsListViewModel) -> String {
        match &self.search {
            Some(term) if !view_model.app_data().is_empty() => {
                format!("No application name matches \"{}\"", term)
            }
            _ => format!(
                "No registered applications. Create one at {}",
                view_model.web_create_url()
            ),
        }
    }
}

impl Render<ApplicationsListViewModel> for ListTable {
    fn render(&mut self, region: &str, view_model: &ApplicationsListViewModel) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }

        let rows: Vec<ApplicationTableRow> = view_model
            .sorted_by_name()
            .into_iter()
            .filter(|app| self.matches(app))
            .map(|app| ApplicationTableRow {
                name: app.name().unwrap_or_default().to_string(),
                client_id: app.client_id().unwrap_or_default().to_string(),
                home_url: app.home_url().unwrap_or_default().to_string(),
            })
            .collect();

        info!("{}", region);
        if rows.is_empty() {
            warning!("{}", self.empty_notice(view_model));
            return;
        }

        println!("{}", Table::new(rows));
    }
}

/// Draws the detail page as a field/value table.
pub struct DetailTable {
    spinner: Option<ProgressBar>,
}

impl DetailTable {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Spinner cleared by the first draw.
    pub fn with_spinner(mut self, spinner: ProgressBar) -> Self {
        self.spinner = Some(spinner);
        self
    }
}

impl Default for DetailTable {
    fn default() -> Self {
        Self::new()
    }
}

fn row(field: &str, value: Option<&str>) -> FieldTableRow {
    FieldTableRow {
        field: field.to_string(),
        value: value.unwrap_or_default().to_string(),
    }
}

impl Render<ApplicationDetailViewModel> for DetailTable {
    fn render(&mut self, region: &str, view_model: &ApplicationDetailViewModel) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }

        if view_model.phase() == Phase::Loading {
            return;
        }

        let app = view_model.app_data();
        let secret = if view_model.show_secret() {
            app.client_secret()
        } else {
            app.client_secret().map(|_| HIDDEN_SECRET)
        };

        let rows = vec![
            row("name", app.name()),
            row("description", app.description()),
            row("home_url", app.home_url()),
            row("callback_url", app.callback_url()),
            row("client_id", app.client_id()),
            row("client_secret", secret),
            row("owner", app.owner()),
            row("page", app.web_detail_url()),
        ];

        info!("{}", region);
        println!("{}", Table::new(rows));

        if view_model.show_messages() {
            for error in app.validation_errors() {
                warning!("{}", error);
            }
        }

        if let Some((text, _)) = view_model.change_message() {
            success!("{}", text);
        }
    }
}
