//! Clickforge CLI binary.
//!
//! This binary is the presentation shell for the studio:
//! - `analyze` judges a title + thumbnail
//! - `combos` proposes three new combinations with generated thumbnails
//! - `script` writes a full video script
//! - `run` does all three, with combos and script side by side

use std::process::ExitCode;

use clap::Parser;
use clickforge::{ClickforgeConfig, ClickforgeResult, build_studio, init_tracing};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match execute(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> ClickforgeResult<bool> {
    let config = match &cli.config {
        Some(path) => ClickforgeConfig::from_file(path)?,
        None => ClickforgeConfig::load()?,
    };
    let studio = build_studio(&config)?;

    // Execute the requested command
    match cli.command {
        Commands::Analyze { packaging } => {
            cli::analyze(&studio, &packaging, cli.json).await?;
        }

        Commands::Combos {
            packaging,
            source,
            out_dir,
        } => {
            cli::combos(&studio, &packaging, &source, out_dir.as_deref(), cli.json).await?;
        }

        Commands::Script { packaging, source } => {
            cli::script(&studio, &packaging, &source, cli.json).await?;
        }

        Commands::Run {
            packaging,
            out_dir,
            no_combos,
            no_script,
        } => {
            return cli::run_all(
                &studio,
                &packaging,
                out_dir.as_deref(),
                !no_combos,
                !no_script,
                cli.json,
            )
            .await;
        }
    }

    Ok(true)
}
