use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use scroblcli::{cli, config::CredentialStore, warning};

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
    /// Raw cmus status fields, as handed over by cmus's status_display_program
    status: Vec<String>,

    /// Called with the API KEY and API SECRET KEY as arguments, updates their values in the config
    #[clap(short, long, num_args = 2, value_names = ["API_KEY", "API_SECRET_KEY"])]
    config: Option<Vec<String>>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let store = CredentialStore::new();

    if let Some(pair) = cli.config {
        // clap guarantees exactly two values here
        cli::update_config(&store, pair[0].clone(), pair[1].clone()).await;
    } else if !cli.status.is_empty() {
        cli::scrobble(&store, cli.status).await;
    } else {
        warning!("Couldn't figure out what you were trying to do, try scroblcli --help!");
        std::process::exit(1);
    }
}
