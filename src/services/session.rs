use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::domain::action::ActionLedger;
use crate::domain::history::KpiHistory;
use crate::domain::pmp::PlannedVsRealized;
use crate::domain::sample::Sample;
use crate::services::kpi_engine::{
    add_action, append_sample, compute_planned_vs_realized, compute_pmp_delta, KpiError,
};
use crate::services::sample_generator::SampleSource;

/// Everything one refresh cycle hands to the presentation layer.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct KpiSnapshot {
    pub timestamp: NaiveDateTime,
    pub sample: Sample,
    pub oee: f64,
    pub actions: PlannedVsRealized,
    pub pmp_delta: f64,
}

/// State carried between refresh cycles of one dashboard session.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    pub history: KpiHistory,
    pub ledger: ActionLedger,
    pub previous_pmp: Option<f64>,
}

impl DashboardSession {
    pub fn new(history: KpiHistory, ledger: ActionLedger) -> Self {
        Self {
            history,
            ledger,
            previous_pmp: None,
        }
    }

    /// Seeds the history so that its last point lies five minutes before
    /// `now`.
    pub fn start(now: NaiveDateTime, capacity: Option<usize>, seed_actions: bool) -> Self {
        let history = KpiHistory::seeded(now - Duration::minutes(20), capacity);
        let ledger = if seed_actions {
            ActionLedger::seeded()
        } else {
            ActionLedger::new()
        };
        Self::new(history, ledger)
    }

    pub fn add_action(
        &mut self,
        name: &str,
        frequency: i64,
        maintained: bool,
    ) -> Result<&ActionLedger, KpiError> {
        add_action(&mut self.ledger, name, frequency, maintained)
    }

    /// Runs one refresh cycle: draws a sample, extends the history and
    /// recomputes PMP against the previous cycle.
    pub fn refresh<S: SampleSource + ?Sized>(
        &mut self,
        source: &mut S,
        timestamp: NaiveDateTime,
    ) -> KpiSnapshot {
        let sample = source.next_sample();
        append_sample(&mut self.history, &sample, timestamp);

        let actions = compute_planned_vs_realized(&self.ledger);
        let pmp_delta = compute_pmp_delta(actions.pmp, self.previous_pmp);
        self.previous_pmp = Some(actions.pmp);

        let timestamp = self.history.last_timestamp().unwrap_or(timestamp);
        debug!(
            %timestamp,
            mttr = sample.mttr.hours,
            mtbf = sample.mtbf.hours,
            oee = sample.oee(),
            pmp = actions.pmp,
            pmp_delta,
            history_len = self.history.len(),
            "dashboard refreshed"
        );

        KpiSnapshot {
            timestamp,
            sample,
            oee: sample.oee(),
            actions,
            pmp_delta,
        }
    }
}
