use clap::Parser;
use tracing_subscriber::EnvFilter;

use maintenance_kpi::commands::base_commands::{CliArgs, Commands};
use maintenance_kpi::commands::completions_cmd::completions_command;
use maintenance_kpi::commands::run_cmd::run_command;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Run { .. } => run_command(cmd),
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
}
