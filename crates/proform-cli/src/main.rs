use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod check;
mod submit;
mod template;

#[derive(Debug, Parser)]
#[command(name = "proform-cli")]
#[command(about = "Company profile intake from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write a starter profile draft.
    Template {
        /// Output path; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a profile draft.
    Check {
        /// Draft file (.yaml or .json).
        file: PathBuf,
    },
    /// Validate a profile draft and submit it to the configured backend.
    Submit {
        /// Draft file (.yaml or .json).
        file: PathBuf,
        /// Where to stash the draft if a login is required.
        #[arg(long)]
        stash: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Template { out } => template::run_template(out.as_deref()),
        Commands::Check { file } => check::run_check(&file),
        Commands::Submit { file, stash } => submit::run_submit(&file, stash.as_deref()).await,
    }
}
