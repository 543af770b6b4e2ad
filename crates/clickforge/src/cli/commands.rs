//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Clickforge - judge, remix and script video title + thumbnail packaging
#[derive(Parser, Debug)]
#[command(name = "clickforge")]
#[command(about = "Judge, remix and script video title + thumbnail packaging with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a title and thumbnail together
    Analyze {
        #[command(flatten)]
        packaging: Packaging,
    },

    /// Propose three new title + thumbnail combinations
    Combos {
        #[command(flatten)]
        packaging: Packaging,

        #[command(flatten)]
        source: AnalysisSource,

        /// Directory to write the generated thumbnails to
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Write a full video script
    Script {
        #[command(flatten)]
        packaging: Packaging,

        #[command(flatten)]
        source: AnalysisSource,
    },

    /// Analyze, then generate combos and a script concurrently
    Run {
        #[command(flatten)]
        packaging: Packaging,

        /// Directory to write the generated thumbnails to
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Skip combo generation
        #[arg(long)]
        no_combos: bool,

        /// Skip script generation
        #[arg(long)]
        no_script: bool,
    },
}

/// Title and thumbnail as given on the command line.
#[derive(Args, Debug, Clone)]
pub struct Packaging {
    /// Video title
    #[arg(long)]
    pub title: String,

    /// Thumbnail image (PNG, JPEG or WebP)
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// MIME type of the thumbnail; guessed from the file extension when omitted
    #[arg(long)]
    pub mime: Option<String>,
}

/// Where combos and scripts get their analysis from.
#[derive(Args, Debug, Clone)]
pub struct AnalysisSource {
    /// Reuse a saved analysis (JSON from `clickforge analyze --json`) instead of analyzing again
    #[arg(long, conflicts_with = "image")]
    pub analysis: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_parses_shared_flags() {
        let cli = Cli::try_parse_from([
            "clickforge",
            "--json",
            "run",
            "--title",
            "10 Foods That Destroy Your Metabolism",
            "--image",
            "thumb.jpg",
            "--no-script",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Run {
                packaging,
                no_combos,
                no_script,
                out_dir,
            } => {
                assert_eq!(packaging.image, Some(PathBuf::from("thumb.jpg")));
                assert!(!no_combos);
                assert!(no_script);
                assert!(out_dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn saved_analysis_excludes_image() {
        let result = Cli::try_parse_from([
            "clickforge",
            "script",
            "--title",
            "t",
            "--image",
            "thumb.png",
            "--analysis",
            "analysis.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn title_is_required() {
        assert!(Cli::try_parse_from(["clickforge", "analyze", "--image", "a.png"]).is_err());
    }
}
