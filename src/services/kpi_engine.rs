use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::action::{ActionLedger, ActionRecord};
use crate::domain::history::KpiHistory;
use crate::domain::pmp::PlannedVsRealized;
use crate::domain::sample::Sample;

#[derive(Error, Debug, PartialEq)]
pub enum KpiError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("division by zero")]
    DivisionByZero,
}

/// Appends one point to the MTTR, MTBF and timestamp series.
///
/// Timestamps never go backwards: a timestamp older than the newest point
/// is clamped to that point's timestamp.
pub fn append_sample(history: &mut KpiHistory, sample: &Sample, timestamp: NaiveDateTime) {
    let timestamp = match history.last_timestamp() {
        Some(last) if timestamp < last => {
            warn!(%timestamp, %last, "sample timestamp is older than history, clamping");
            last
        }
        _ => timestamp,
    };
    history.push(timestamp, sample.mttr.hours, sample.mtbf.hours);
}

pub fn compute_planned_vs_realized(ledger: &ActionLedger) -> PlannedVsRealized {
    PlannedVsRealized::from_ledger(ledger)
}

/// Planned maintenance percentage over the whole ledger. Zero when nothing
/// is planned.
pub fn compute_pmp(ledger: &ActionLedger) -> f64 {
    compute_planned_vs_realized(ledger).pmp
}

/// Percentage change of PMP since the previous refresh. Zero when there is
/// no previous value or when the previous value is zero.
pub fn compute_pmp_delta(current_pmp: f64, previous_pmp: Option<f64>) -> f64 {
    let Some(previous) = previous_pmp else {
        return 0.0;
    };
    match percentage_change(current_pmp, previous) {
        Ok(delta) => delta,
        Err(e) => {
            debug!(current_pmp, previous, "pmp delta degraded to zero: {e}");
            0.0
        }
    }
}

fn percentage_change(current: f64, previous: f64) -> Result<f64, KpiError> {
    if previous == 0.0 {
        return Err(KpiError::DivisionByZero);
    }
    Ok(100.0 * (current - previous) / previous)
}

/// Validates and appends a maintenance action. The ledger is untouched when
/// validation fails.
pub fn add_action<'a>(
    ledger: &'a mut ActionLedger,
    name: &str,
    frequency: i64,
    maintained: bool,
) -> Result<&'a ActionLedger, KpiError> {
    if frequency < 1 {
        return Err(KpiError::InvalidArgument(format!(
            "frequency must be at least 1, got {frequency}"
        )));
    }
    let frequency = u32::try_from(frequency).map_err(|_| {
        KpiError::InvalidArgument(format!("frequency {frequency} is too large"))
    })?;

    ledger.push(ActionRecord::new(name, frequency, maintained));
    debug!(action = name, frequency, maintained, "maintenance action added");
    Ok(ledger)
}
