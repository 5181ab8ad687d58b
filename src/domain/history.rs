use std::collections::VecDeque;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

const SEED_MTTR: [u32; 4] = [5, 6, 4, 7];
const SEED_MTBF: [u32; 4] = [10, 12, 11, 9];
const SEED_SPACING_MINUTES: i64 = 5;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPoint {
    pub timestamp: NaiveDateTime,
    pub mttr_hours: u32,
    pub mtbf_hours: u32,
}

/// Rolling MTTR/MTBF series sharing one timestamp axis.
///
/// The three series are stored side by side and are always pushed and
/// evicted together, so their lengths never diverge. With a capacity the
/// oldest point is dropped once the buffer is full; without one the
/// history grows for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiHistory {
    timestamps: VecDeque<NaiveDateTime>,
    mttr: VecDeque<u32>,
    mtbf: VecDeque<u32>,
    capacity: Option<usize>,
}

impl KpiHistory {
    pub fn new() -> Self {
        Self {
            timestamps: VecDeque::new(),
            mttr: VecDeque::new(),
            mtbf: VecDeque::new(),
            capacity: None,
        }
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        let mut history = Self::new();
        history.capacity = capacity.map(|value| value.max(1));
        history
    }

    /// Four historical points, five minutes apart, starting at `first`.
    pub fn seeded(first: NaiveDateTime, capacity: Option<usize>) -> Self {
        let mut history = Self::with_capacity(capacity);
        for (idx, (mttr, mtbf)) in SEED_MTTR.iter().zip(SEED_MTBF.iter()).enumerate() {
            let timestamp = first + Duration::minutes(SEED_SPACING_MINUTES * idx as i64);
            history.push(timestamp, *mttr, *mtbf);
        }
        history
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamps.back().copied()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = &NaiveDateTime> {
        self.timestamps.iter()
    }

    pub fn mttr(&self) -> impl Iterator<Item = &u32> {
        self.mttr.iter()
    }

    pub fn mtbf(&self) -> impl Iterator<Item = &u32> {
        self.mtbf.iter()
    }

    pub fn points(&self) -> Vec<HistoryPoint> {
        self.timestamps
            .iter()
            .zip(self.mttr.iter())
            .zip(self.mtbf.iter())
            .map(|((timestamp, mttr), mtbf)| HistoryPoint {
                timestamp: *timestamp,
                mttr_hours: *mttr,
                mtbf_hours: *mtbf,
            })
            .collect()
    }

    pub(crate) fn push(&mut self, timestamp: NaiveDateTime, mttr_hours: u32, mtbf_hours: u32) {
        if let Some(capacity) = self.capacity {
            while self.timestamps.len() >= capacity {
                self.timestamps.pop_front();
                self.mttr.pop_front();
                self.mtbf.pop_front();
            }
        }
        self.timestamps.push_back(timestamp);
        self.mttr.push_back(mttr_hours);
        self.mtbf.push_back(mtbf_hours);
    }
}

impl Default for KpiHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::at_time;

    #[test]
    fn seeded_history_has_four_points_five_minutes_apart() {
        let history = KpiHistory::seeded(at_time(10, 0, 0), None);
        let points = history.points();

        assert_eq!(points.len(), 4);
        assert_eq!(points[0].timestamp, at_time(10, 0, 0));
        assert_eq!(points[3].timestamp, at_time(10, 15, 0));
        assert_eq!(history.mttr().copied().collect::<Vec<_>>(), vec![5, 6, 4, 7]);
        assert_eq!(history.mtbf().copied().collect::<Vec<_>>(), vec![10, 12, 11, 9]);
    }

    #[test]
    fn capacity_evicts_oldest_point_from_every_series() {
        let mut history = KpiHistory::seeded(at_time(10, 0, 0), Some(4));
        history.push(at_time(10, 20, 0), 3, 14);

        assert_eq!(history.len(), 4);
        assert_eq!(history.timestamps().count(), history.mttr().count());
        assert_eq!(history.mttr().count(), history.mtbf().count());
        assert_eq!(history.points()[0].timestamp, at_time(10, 5, 0));
        assert_eq!(history.mttr().copied().collect::<Vec<_>>(), vec![6, 4, 7, 3]);
        assert_eq!(history.mtbf().copied().collect::<Vec<_>>(), vec![12, 11, 9, 14]);
    }

    #[test]
    fn zero_capacity_is_treated_as_one() {
        let mut history = KpiHistory::with_capacity(Some(0));
        history.push(at_time(9, 0, 0), 4, 9);
        history.push(at_time(9, 1, 0), 5, 10);

        assert_eq!(history.capacity(), Some(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_timestamp(), Some(at_time(9, 1, 0)));
    }
}
