use anyhow::Result;
use clap::Parser;
use elmscan::cli::{Cli, Commands};
use elmscan::commands::{self, AnalyzeConfig, BatchConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            engine,
        } => commands::handle_analyze(AnalyzeConfig {
            path,
            format,
            output,
            engine,
        })?,
        Commands::Batch { paths, engine } => {
            commands::handle_batch(BatchConfig { paths, engine })?;
            0
        }
    };

    // The one process-terminating side effect; the exit code itself comes
    // from the pure decision in commands::analyze.
    std::process::exit(code)
}
