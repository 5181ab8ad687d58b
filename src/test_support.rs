use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::sample::{MtbfReading, MttrReading, OeeFactors, Sample};
use crate::services::sample_generator::SampleSource;

// A mock SampleSource that replays the given samples in a loop
pub struct FixedSampleSource {
    samples: Vec<Sample>,
    next: usize,
}

impl FixedSampleSource {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples, next: 0 }
    }
}

impl SampleSource for FixedSampleSource {
    fn next_sample(&mut self) -> Sample {
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        sample
    }
}

pub fn at_time(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

pub fn fixed_sample(mttr_hours: u32, mtbf_hours: u32) -> Sample {
    Sample {
        mttr: MttrReading {
            hours: mttr_hours,
            delta_pct: -2.5,
        },
        mtbf: MtbfReading {
            hours: mtbf_hours,
            delta_pct: 3.25,
        },
        factors: OeeFactors {
            quality: 90.0,
            performance: 90.0,
            availability: 80.0,
        },
    }
}
