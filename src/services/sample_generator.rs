use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::sample::{MtbfReading, MttrReading, OeeFactors, Sample};

/// Anything that can hand out one measurement sample per refresh cycle.
pub trait SampleSource {
    fn next_sample(&mut self) -> Sample;
}

pub struct RandomSampleSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSampleSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampleSource<StdRng> {
    /// Deterministic when a seed is given, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> SampleSource for RandomSampleSource<R> {
    fn next_sample(&mut self) -> Sample {
        generate_sample_with_rng(&mut self.rng)
    }
}

pub fn generate_sample() -> Sample {
    let mut rng = rand::thread_rng();
    generate_sample_with_rng(&mut rng)
}

/// Draws every field independently and uniformly. Hour counts use
/// half-open ranges, percentage changes are inclusive on both ends.
pub fn generate_sample_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Sample {
    let mttr = MttrReading {
        hours: rng.gen_range(3..8),
        delta_pct: rng.gen_range(-10.0..=10.0),
    };
    let mtbf = MtbfReading {
        hours: rng.gen_range(8..15),
        delta_pct: rng.gen_range(-10.0..=10.0),
    };
    let factors = OeeFactors {
        quality: rng.gen_range(85.0..95.0),
        performance: rng.gen_range(85.0..95.0),
        availability: rng.gen_range(75.0..85.0),
    };

    Sample {
        mttr,
        mtbf,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_samples_stay_within_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let min_oee = 85.0 * 85.0 * 75.0 / 10000.0;
        let max_oee = 95.0 * 95.0 * 85.0 / 10000.0;

        for _ in 0..5000 {
            let sample = generate_sample_with_rng(&mut rng);
            assert!((3..8).contains(&sample.mttr.hours));
            assert!((8..15).contains(&sample.mtbf.hours));
            assert!((-10.0..=10.0).contains(&sample.mttr.delta_pct));
            assert!((-10.0..=10.0).contains(&sample.mtbf.delta_pct));
            assert!((85.0..95.0).contains(&sample.factors.quality));
            assert!((85.0..95.0).contains(&sample.factors.performance));
            assert!((75.0..85.0).contains(&sample.factors.availability));
            assert!(sample.oee() >= min_oee && sample.oee() <= max_oee);
        }
    }

    #[test]
    fn same_seed_yields_same_samples() {
        let mut first = RandomSampleSource::from_seed(Some(42));
        let mut second = RandomSampleSource::from_seed(Some(42));

        for _ in 0..10 {
            assert_eq!(first.next_sample(), second.next_sample());
        }
    }

    #[test]
    fn generate_sample_can_be_called_repeatedly() {
        for _ in 0..100 {
            let sample = generate_sample();
            assert!((3..8).contains(&sample.mttr.hours));
        }
    }
}
