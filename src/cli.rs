use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "elmscan")]
#[command(about = "Command-line driver for an external Elm static-analysis engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a project and exit non-zero when findings remain
    Analyze {
        /// Project root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format (overrides elmscan.json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Analysis engine command
        #[arg(long, env = "ELMSCAN_ENGINE", default_value = "elmscan-engine")]
        engine: PathBuf,
    },

    /// Feed an explicit set of files through the engine one at a time
    Batch {
        /// Files or directories to analyse
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Analysis engine command
        #[arg(long, env = "ELMSCAN_ENGINE", default_value = "elmscan-engine")]
        engine: PathBuf,
    },
}
