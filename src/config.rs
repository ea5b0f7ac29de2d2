//! Runtime configuration
//!
//! Settings come from the process environment so the container image can be
//! tuned with `docker run -e ...` without touching the echoed arguments.

use std::time::Duration;

use crate::error::{DemoError, Result};

pub const STEP_DELAY_VAR: &str = "HELLO_STEP_DELAY_MS";
pub const LOG_FORMAT_VAR: &str = "HELLO_LOG_FORMAT";

const DEFAULT_STEP_DELAY_MS: u64 = 1000;

/// Settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Pause before each progress line of the simulated work loop
    pub step_delay: Duration,
    /// Emit stderr diagnostics as JSON lines
    pub log_json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            log_json: false,
        }
    }
}

impl RunConfig {
    /// Load from the current process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(STEP_DELAY_VAR) {
            let ms: u64 = raw.trim().parse().map_err(|_| {
                DemoError::Config(format!(
                    "{} must be a whole number of milliseconds, got '{}'",
                    STEP_DELAY_VAR, raw
                ))
            })?;
            config.step_delay = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_json = match raw.trim().to_lowercase().as_str() {
                "" | "text" => false,
                "json" => true,
                other => {
                    return Err(DemoError::Config(format!(
                        "{} must be 'text' or 'json', got '{}'",
                        LOG_FORMAT_VAR, other
                    )))
                }
            };
        }

        Ok(config)
    }
}
