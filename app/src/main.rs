#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod command;

use command::{
    AskInput, AskStrategy, CommandStrategy, InitStrategy, ServeInput, ServeStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "lecbot")]
#[command(about = "Lecture file lookup bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(short, long)]
        bind: Option<String>,

        /// Directory holding the lecture files
        #[arg(short, long)]
        files_dir: Option<PathBuf>,

        /// Config file to use instead of ~/lecbot/config.json
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Resolve messages from the command line
    Ask {
        /// Single message to resolve
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Directory holding the lecture files
        #[arg(short, long)]
        files_dir: Option<PathBuf>,

        /// Config file to use instead of ~/lecbot/config.json
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the extracted subject and lecture number as well
        #[arg(short, long)]
        explain: bool,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            files_dir,
            config,
        } => {
            ServeStrategy
                .execute(ServeInput {
                    bind,
                    files_dir,
                    config,
                })
                .await?;
        }
        Commands::Ask {
            message,
            files_dir,
            config,
            explain,
        } => {
            AskStrategy
                .execute(AskInput {
                    message,
                    files_dir,
                    config,
                    explain,
                })
                .await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
