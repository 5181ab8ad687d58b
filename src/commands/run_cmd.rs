use std::thread;
use std::time::Duration;

use chrono::Local;
use tracing::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_tick_report;
use crate::services::dashboard_config::DashboardConfig;
use crate::services::dashboard_report::{write_report, DashboardReport};
use crate::services::kpi_plot::{write_oee_components_png, write_trend_png};
use crate::services::sample_generator::RandomSampleSource;
use crate::services::session::DashboardSession;

pub fn run_command(cmd: Commands) {
    if let Commands::Run {
        ticks,
        interval_secs,
        config,
        seed,
        history_capacity,
        actions,
        empty_ledger,
        output,
        plot,
    } = cmd
    {
        if ticks == 0 {
            eprintln!("Failed to run dashboard: ticks must be greater than zero");
            return;
        }

        let config = match DashboardConfig::load(config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load dashboard config: {e:?}");
                return;
            }
        };
        let interval = Duration::from_secs(interval_secs.unwrap_or(config.refresh_interval_secs));
        let capacity = history_capacity.or(config.history_capacity);
        let seed = seed.or(config.seed);

        let mut session = DashboardSession::start(
            Local::now().naive_local(),
            capacity,
            config.seed_actions && !empty_ledger,
        );
        for action in &actions {
            if let Err(e) = session.add_action(&action.name, action.frequency, action.maintained) {
                eprintln!("Failed to add action {}: {e:?}", action.name);
                return;
            }
        }

        info!(ticks, ?interval, ?capacity, ?seed, "starting dashboard session");
        let mut source = RandomSampleSource::from_seed(seed);
        let mut latest = None;
        for tick in 1..=ticks {
            if tick > 1 {
                thread::sleep(interval);
            }
            let snapshot = session.refresh(&mut source, Local::now().naive_local());
            println!("{}", format_tick_report(tick, &snapshot, &session.ledger));
            println!();
            latest = Some(snapshot);
        }
        let Some(latest) = latest else {
            return;
        };

        if let Some(prefix) = plot {
            let trend_path = format!("{prefix}.trend.png");
            let oee_path = format!("{prefix}.oee.png");
            match write_trend_png(&trend_path, &session.history) {
                Ok(()) => println!("Trend chart written to {trend_path}"),
                Err(e) => eprintln!("Failed to write trend chart: {e:?}"),
            }
            match write_oee_components_png(&oee_path, &latest.sample.factors) {
                Ok(()) => println!("OEE chart written to {oee_path}"),
                Err(e) => eprintln!("Failed to write OEE chart: {e:?}"),
            }
        }

        if let Some(output) = output {
            let report = DashboardReport::from_session(&session, latest, ticks);
            match write_report(&report, &output) {
                Ok(()) => println!("Dashboard report written to {output}"),
                Err(e) => eprintln!("Failed to write dashboard report: {e:?}"),
            }
        }
        info!(history_len = session.history.len(), "dashboard session finished");
    }
}
