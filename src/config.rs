//! Tunables for the hybrid quicksort.

use std::env;
use std::num::ParseIntError;

use log::warn;
use once_cell::sync::OnceCell;
use thiserror::Error;

/// Environment variable read by [`HybridConfig::from_env`].
pub const THRESHOLD_ENV_VAR: &str = "SORT_HYBRID_THRESHOLD";

pub const DEFAULT_INSERTION_THRESHOLD: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SORT_HYBRID_THRESHOLD value '{value}'")]
    InvalidThreshold {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HybridConfig {
    /// Ranges with at most this many elements are finished with insertion sort. The best value
    /// depends on the hardware and the element type, `0` or `1` disables the fallback.
    pub insertion_threshold: usize,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
        }
    }
}

impl HybridConfig {
    pub fn new(insertion_threshold: usize) -> Self {
        Self {
            insertion_threshold,
        }
    }

    /// Reads the threshold from `SORT_HYBRID_THRESHOLD`, falling back to the default if unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(THRESHOLD_ENV_VAR) {
            Ok(value) => Self::parse_threshold(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Process-wide configuration, read from the environment on first use.
    ///
    /// An invalid environment value is logged and replaced by the default.
    pub fn global() -> &'static HybridConfig {
        static GLOBAL: OnceCell<HybridConfig> = OnceCell::new();

        GLOBAL.get_or_init(|| {
            Self::from_env().unwrap_or_else(|err| {
                warn!("{err}, using default threshold {DEFAULT_INSERTION_THRESHOLD}");
                Self::default()
            })
        })
    }

    fn parse_threshold(value: &str) -> Result<Self, ConfigError> {
        value
            .trim()
            .parse::<usize>()
            .map(Self::new)
            .map_err(|source| ConfigError::InvalidThreshold {
                value: value.to_owned(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold() {
        assert_eq!(HybridConfig::default().insertion_threshold, 10);
    }

    #[test]
    fn parse_valid() {
        assert_eq!(HybridConfig::parse_threshold("24").unwrap(), HybridConfig::new(24));
        assert_eq!(HybridConfig::parse_threshold(" 0 ").unwrap(), HybridConfig::new(0));
    }

    #[test]
    fn parse_invalid() {
        let err = HybridConfig::parse_threshold("-4").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold { ref value, .. } if value == "-4"));
        assert_eq!(err.to_string(), "invalid SORT_HYBRID_THRESHOLD value '-4'");

        assert!(HybridConfig::parse_threshold("ten").is_err());
    }
}
