//! Benchmark configuration, optionally loaded from a TOML file.
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! small_reps = 1000
//! large_reps = 5
//! large_size = 2000
//! growth_reps = 5
//! growth_size = 50000
//! ```

use crate::error::BenchError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Repetitions for each checker on the small sample.
    pub small_reps: u32,
    /// Repetitions for each checker on the mirrored sample.
    pub large_reps: u32,
    /// `n` passed to `mirrored_sample`; the list holds `2n` values.
    pub large_size: usize,
    /// Repetitions for the list-append and tuple-concat workloads.
    pub growth_reps: u32,
    /// Number of elements each growth workload builds.
    pub growth_size: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            small_reps: 1000,
            large_reps: 5,
            large_size: 2000,
            growth_reps: 5,
            growth_size: 50_000,
        }
    }
}

impl BenchConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, BenchError> {
        let text = fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, BenchError> {
        let config: BenchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject repetition counts of zero before any timing starts.
    pub fn validate(&self) -> Result<(), BenchError> {
        let reps = [
            ("small_reps", self.small_reps),
            ("large_reps", self.large_reps),
            ("growth_reps", self.growth_reps),
        ];
        for (key, value) in reps {
            if value == 0 {
                return Err(BenchError::InvalidConfig {
                    key,
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(BenchConfig::from_toml("").unwrap(), BenchConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = BenchConfig::from_toml("large_size = 10\nsmall_reps = 3\n").unwrap();
        assert_eq!(config.large_size, 10);
        assert_eq!(config.small_reps, 3);
        assert_eq!(config.growth_size, 50_000);
    }

    #[test]
    fn test_zero_reps_rejected() {
        let err = BenchConfig::from_toml("growth_reps = 0").unwrap_err();
        assert!(matches!(
            err,
            BenchError::InvalidConfig {
                key: "growth_reps",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = BenchConfig::from_toml("reps = 3").unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = BenchConfig::load(Path::new("/nonexistent/squarecheck.toml")).unwrap_err();
        assert!(matches!(err, BenchError::ConfigRead { .. }));
    }
}
