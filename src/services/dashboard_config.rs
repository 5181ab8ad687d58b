use std::io;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardConfigError {
    #[error("failed to read dashboard config: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse dashboard config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub refresh_interval_secs: u64,
    pub history_capacity: Option<usize>,
    pub seed_actions: bool,
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 5,
            history_capacity: Some(288),
            seed_actions: true,
            seed: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, DashboardConfigError> {
        let contents = std::fs::read_to_string(filepath)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, DashboardConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }

    /// Config file when given, defaults otherwise.
    pub fn load(filepath: Option<&str>) -> Result<Self, DashboardConfigError> {
        match filepath {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}
