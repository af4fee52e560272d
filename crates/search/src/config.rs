use thiserror::Error;

/// Configuration for the optimizer driver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    time_limit: Option<f64>,
}

/// Errors that can occur when validating a driver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time_limit must be finite and positive")]
    TimeLimit,
}

impl Config {
    /// Creates a new config with an optional time limit in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the time limit is present but not finite and
    /// strictly positive.
    pub fn new(time_limit: Option<f64>) -> Result<Self, ConfigError> {
        if let Some(limit) = time_limit {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(ConfigError::TimeLimit);
            }
        }

        Ok(Self { time_limit })
    }

    /// Creates a config that stops the run once `seconds` have elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if `seconds` is not finite and strictly positive.
    pub fn with_time_limit(seconds: f64) -> Result<Self, ConfigError> {
        Self::new(Some(seconds))
    }

    /// Returns the time limit in seconds, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<f64> {
        self.time_limit
    }

    /// Returns `true` if `elapsed_time` has reached the time limit.
    #[must_use]
    pub fn time_limit_reached(&self, elapsed_time: f64) -> bool {
        self.time_limit.is_some_and(|limit| elapsed_time >= limit)
    }
}
