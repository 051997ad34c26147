mod cli;
mod handlers;
mod output;

use brain_core::AppConfig;
use brain_domain::ContentStore;
use brain_tui::App;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("BRAIN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging to the terminal would corrupt the TUI, so only file logging is
    // installed when no subcommand is given.
    if cli.command.is_some() || std::env::var_os("BRAIN_DEBUG_LOG").is_some() {
        init_logging()?;
    }

    let config = AppConfig::load(cli.config.as_deref());
    if let Err(e) = config.validate() {
        tracing::warn!("{}", e);
    }

    match cli.command {
        None => {
            let mut app = App::new(config);
            app.run().await?;
        }
        Some(Commands::List { kind }) => {
            handlers::handle_list(&ContentStore::seeded(), kind)?;
        }
        Some(Commands::Share { id, print }) => {
            handlers::handle_share(&ContentStore::seeded(), &config, id, print)?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "brain", &mut std::io::stdout());
        }
    }

    Ok(())
}
