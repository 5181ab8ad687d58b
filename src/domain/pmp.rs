use serde::Serialize;

use crate::domain::action::ActionLedger;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PlannedVsRealized {
    pub planned: u64,
    pub realized: u64,
    pub pmp: f64,
}

impl PlannedVsRealized {
    pub fn from_ledger(ledger: &ActionLedger) -> Self {
        let planned: u64 = ledger
            .records()
            .iter()
            .map(|record| u64::from(record.frequency))
            .sum();
        let realized: u64 = ledger
            .records()
            .iter()
            .filter(|record| record.maintained)
            .map(|record| u64::from(record.frequency))
            .sum();

        let pmp = if planned > 0 {
            realized as f64 * 100.0 / planned as f64
        } else {
            0.0
        };

        Self {
            planned,
            realized,
            pmp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_has_nothing_planned() {
        let totals = PlannedVsRealized::from_ledger(&ActionLedger::new());
        assert_eq!(totals.planned, 0);
        assert_eq!(totals.realized, 0);
        assert_eq!(totals.pmp, 0.0);
    }

    #[test]
    fn seeded_ledger_realizes_seven_of_ten() {
        let totals = PlannedVsRealized::from_ledger(&ActionLedger::seeded());
        assert_eq!(totals.planned, 10);
        assert_eq!(totals.realized, 7);
        assert!((totals.pmp - 70.0).abs() < 1e-9);
    }
}
