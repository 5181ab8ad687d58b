use std::io;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::domain::action::ActionLedger;
use crate::domain::history::HistoryPoint;
use crate::services::session::{DashboardSession, KpiSnapshot};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write dashboard report: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize dashboard report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize dashboard report as json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Debug, Clone)]
pub struct DashboardReport {
    pub ticks: usize,
    pub latest: KpiSnapshot,
    pub history: Vec<HistoryPoint>,
    pub actions: ActionLedger,
}

impl DashboardReport {
    pub fn from_session(session: &DashboardSession, latest: KpiSnapshot, ticks: usize) -> Self {
        Self {
            ticks,
            latest,
            history: session.history.points(),
            actions: session.ledger.clone(),
        }
    }
}

/// Serializes as JSON for `.json` paths and YAML for anything else.
pub fn render_report(report: &DashboardReport, output_path: &str) -> Result<String, ReportError> {
    let is_json = Path::new(output_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_yaml::to_string(report)?)
    }
}

pub fn write_report(report: &DashboardReport, output_path: &str) -> Result<(), ReportError> {
    let contents = render_report(report, output_path)?;
    std::fs::write(output_path, contents)?;
    Ok(())
}
