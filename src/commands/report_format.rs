use crate::domain::action::ActionLedger;
use crate::services::session::KpiSnapshot;

pub fn format_tick_report(tick: usize, snapshot: &KpiSnapshot, ledger: &ActionLedger) -> String {
    let sample = &snapshot.sample;
    let actions = &snapshot.actions;

    let mut lines = Vec::new();
    lines.push(format!(
        "Preventive Maintenance Dashboard (tick {tick}, {})",
        snapshot.timestamp.format("%H:%M:%S")
    ));
    lines.push(format!(
        "MTTR: {} h ({:+.2}%)",
        sample.mttr.hours, sample.mttr.delta_pct
    ));
    lines.push(format!(
        "MTBF: {} h ({:+.2}%)",
        sample.mtbf.hours, sample.mtbf.delta_pct
    ));
    lines.push(format!("OEE: {:.2}%", snapshot.oee));
    lines.push(format!("  Quality: {:.2}", sample.factors.quality));
    lines.push(format!("  Performance: {:.2}", sample.factors.performance));
    lines.push(format!("  Availability: {:.2}", sample.factors.availability));
    lines.push(String::new());
    lines.push("Maintenance Actions:".to_string());
    lines.push("Action | Frequency | Maintained".to_string());
    lines.push("-------|-----------|-----------".to_string());
    for record in ledger.records() {
        lines.push(format!(
            "{} | {} | {}",
            record.name,
            record.frequency,
            if record.maintained { "yes" } else { "no" }
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Planned actions: {}, realized actions: {}",
        actions.planned, actions.realized
    ));
    lines.push(format!(
        "PMP: {:.2}% ({:+.2}%)",
        actions.pmp, snapshot.pmp_delta
    ));

    lines.join("\n")
}
