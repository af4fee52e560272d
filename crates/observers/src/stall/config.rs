use thiserror::Error;

/// Configuration for a [`StallMonitor`].
///
/// [`StallMonitor`]: super::StallMonitor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    stall_timeout: f64,
    gap_epsilon: f64,
}

/// Errors that can occur when validating a stall monitor config.
///
/// An invalid configuration is fatal: there is no fallback value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("stall_timeout must be finite and strictly positive")]
    StallTimeout,

    #[error("gap_epsilon must be finite and strictly positive")]
    GapEpsilon,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50.0, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated values.
    ///
    /// - `stall_timeout`: seconds allowed without a significant gap change
    /// - `gap_epsilon`: smallest gap change considered significant
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not finite and strictly positive.
    pub fn new(stall_timeout: f64, gap_epsilon: f64) -> Result<Self, ConfigError> {
        if !stall_timeout.is_finite() || stall_timeout <= 0.0 {
            return Err(ConfigError::StallTimeout);
        }
        if !gap_epsilon.is_finite() || gap_epsilon <= 0.0 {
            return Err(ConfigError::GapEpsilon);
        }

        Ok(Self {
            stall_timeout,
            gap_epsilon,
        })
    }

    /// Returns the stall timeout in seconds.
    #[must_use]
    pub fn stall_timeout(&self) -> f64 {
        self.stall_timeout
    }

    /// Returns the smallest significant gap change.
    #[must_use]
    pub fn gap_epsilon(&self) -> f64 {
        self.gap_epsilon
    }
}

/// Unvalidated config as read from a file; missing fields use the defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    stall_timeout: f64,
    gap_epsilon: f64,
}

#[cfg(feature = "serde")]
impl Default for RawConfig {
    fn default() -> Self {
        let config = Config::default();
        Self {
            stall_timeout: config.stall_timeout,
            gap_epsilon: config.gap_epsilon,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.stall_timeout, raw.gap_epsilon)
    }
}
