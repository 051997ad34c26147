use brain_domain::CategorySelection;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brain")]
#[command(about = "A terminal second brain for saved content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config file (or set BRAIN_CONFIG env var)
    #[arg(long, value_name = "FILE", env = "BRAIN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List saved content as JSON
    List {
        /// Content type to show: all, tweet, article, video, audio, bookmark
        #[arg(long = "type", value_name = "TYPE", default_value = "all")]
        kind: CategorySelection,
    },
    /// Share one item, or everything when no id is given
    Share {
        #[arg(long)]
        id: Option<String>,
        /// Print the share text instead of dispatching it
        #[arg(long)]
        print: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
