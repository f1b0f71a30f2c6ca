use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use devapps::{
    cli::{self, EditOptions},
    config, error,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List registered applications
    List(ListOptions),

    /// Show one application
    Show(ShowOptions),

    /// Register a new application
    Create(CreateOptions),

    /// Change an application
    Edit(EditArgs),

    /// Deactivate an application by its API URL
    Delete(DeleteOptions),

    /// Deactivate an application by its client ID
    Deactivate(DeactivateOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Only show applications whose name contains this text
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowOptions {
    /// API URL of the application
    pub url: String,

    /// Reveal the client secret
    #[clap(long)]
    pub secret: bool,

    /// Open the application page in the browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    #[clap(long)]
    pub name: String,

    #[clap(long)]
    pub description: Option<String>,

    #[clap(long)]
    pub home_url: String,

    #[clap(long)]
    pub callback_url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditArgs {
    /// API URL of the application
    pub url: String,

    #[clap(long)]
    pub name: Option<String>,

    #[clap(long)]
    pub description: Option<String>,

    #[clap(long)]
    pub home_url: Option<String>,

    #[clap(long)]
    pub callback_url: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteOptions {
    /// API URL of the application
    pub url: String,

    /// Skip the confirmation prompt
    #[clap(long, short)]
    pub yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeactivateOptions {
    pub client_id: String,

    /// Skip the confirmation prompt
    #[clap(long, short)]
    pub yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::List(opt) => cli::list_applications(opt.search).await,
        Command::Show(opt) => cli::show_application(opt.url, opt.secret, opt.open).await,
        Command::Create(opt) => {
            cli::create_application(EditOptions {
                name: Some(opt.name),
                description: opt.description,
                home_url: Some(opt.home_url),
                callback_url: Some(opt.callback_url),
            })
            .await
        }
        Command::Edit(opt) => {
            cli::edit_application(
                opt.url,
                EditOptions {
                    name: opt.name,
                    description: opt.description,
                    home_url: opt.home_url,
                    callback_url: opt.callback_url,
                },
            )
            .await
        }
        Command::Delete(opt) => cli::delete_application(opt.url, opt.yes).await,
        Command::Deactivate(opt) => cli::deactivate_application(opt.client_id, opt.yes).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
