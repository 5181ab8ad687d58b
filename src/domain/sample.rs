use serde::Serialize;

/// Mean time to repair reading for one refresh cycle.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct MttrReading {
    pub hours: u32,
    pub delta_pct: f64,
}

/// Mean time between failures reading for one refresh cycle.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct MtbfReading {
    pub hours: u32,
    pub delta_pct: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct OeeFactors {
    pub quality: f64,
    pub performance: f64,
    pub availability: f64,
}

impl OeeFactors {
    /// Overall equipment effectiveness in percent. Each factor is a
    /// percentage, so the product is scaled back down by 100 * 100.
    pub fn oee(&self) -> f64 {
        self.quality * self.performance * self.availability / 10000.0
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub mttr: MttrReading,
    pub mtbf: MtbfReading,
    pub factors: OeeFactors,
}

impl Sample {
    pub fn oee(&self) -> f64 {
        self.factors.oee()
    }
}
