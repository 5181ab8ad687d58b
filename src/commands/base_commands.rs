use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the maintenance KPI dashboard for a number of refresh ticks
    Run {
        /// Number of refresh ticks to run
        #[arg(short, long, default_value_t = 1)]
        ticks: usize,
        /// Seconds to wait between ticks (overrides the config file)
        #[arg(short, long)]
        interval_secs: Option<u64>,
        /// Optional path to a dashboard config YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Seed for the sample generator (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum number of history points to keep (overrides the config file)
        #[arg(long)]
        history_capacity: Option<usize>,
        /// Maintenance action to add before the first tick, as NAME:FREQUENCY:MAINTAINED
        #[arg(short, long = "action", value_parser = parse_action_arg)]
        actions: Vec<ActionArg>,
        /// Start with an empty action ledger instead of the seeded one
        #[arg(long)]
        empty_ledger: bool,
        /// Output report file (YAML, or JSON for a .json extension)
        #[arg(short, long)]
        output: Option<String>,
        /// Prefix for the trend and OEE PNG charts
        #[arg(short, long)]
        plot: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionArg {
    pub name: String,
    pub frequency: i64,
    pub maintained: bool,
}

fn parse_action_arg(value: &str) -> Result<ActionArg, String> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(maintained), Some(frequency), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected NAME:FREQUENCY:MAINTAINED, got '{value}'"));
    };

    let frequency = frequency
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid frequency '{frequency}'"))?;
    let maintained = match maintained.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => true,
        "false" | "no" | "n" | "0" => false,
        other => return Err(format!("invalid maintained flag '{other}'")),
    };

    Ok(ActionArg {
        name: name.trim().to_string(),
        frequency,
        maintained,
    })
}
