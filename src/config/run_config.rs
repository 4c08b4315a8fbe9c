//! Per-run configuration support
//!
//! Loads run settings from a `gitseed.toml` in the target directory when one
//! exists, falling back to built-in defaults. Every value the scheduler and
//! labeler depend on comes through here explicitly; nothing is read from
//! ambient state at generation time.
//!
//! # Configuration Format
//!
//! ```toml
//! # gitseed.toml
//!
//! # Extra names/globs to skip on top of the built-in ignore set
//! ignore = ["generated", "*.snap"]
//!
//! [window]
//! # Datetimes are quoted ISO 8601, no timezone
//! start = "2025-09-08T09:00:00"
//! end = "2025-09-15T18:00:00"
//! min_interval_minutes = 5
//! max_interval_minutes = 180
//! work_start_hour = 9
//! work_end_hour = 18
//!
//! [identity]
//! name = "Developer"
//! email = "dev@example.com"
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::git::Identity;
use crate::schedule::{ScheduleWindow, WorkHours};

/// Config file name looked up in the target directory.
pub const CONFIG_FILE: &str = "gitseed.toml";

/// Invalid configuration that must never reach the scheduler.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window start {start} is not before end {end}")]
    EmptyWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("min interval {min}m exceeds max interval {max}m")]
    InvertedIntervals { min: i64, max: i64 },

    #[error("interval bounds must be positive, got {0}m")]
    NonPositiveInterval(i64),

    #[error("working hours {start}..={end} invalid: hours are 0-23 and start must not exceed end")]
    InvalidWorkHours { start: u32, end: u32 },
}

/// Schedule window settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub min_interval_minutes: i64,
    pub max_interval_minutes: i64,
    pub work_start_hour: u32,
    pub work_end_hour: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start: default_datetime(2025, 9, 8, 9),
            end: default_datetime(2025, 9, 15, 18),
            min_interval_minutes: 5,
            max_interval_minutes: 180,
            work_start_hour: 9,
            work_end_hour: 18,
        }
    }
}

/// Author identity written into freshly initialized repositories.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub name: String,
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "Developer".to_string(),
            email: "dev@example.com".to_string(),
        }
    }
}

/// Full per-run configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub window: WindowConfig,
    pub identity: IdentityConfig,
    pub ignore: Vec<String>,
}

impl RunConfig {
    /// Check the schedule invariants: a non-empty window, ordered positive
    /// intervals, and an in-range working-hours band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if w.start >= w.end {
            return Err(ConfigError::EmptyWindow {
                start: w.start,
                end: w.end,
            });
        }
        if w.min_interval_minutes <= 0 {
            return Err(ConfigError::NonPositiveInterval(w.min_interval_minutes));
        }
        if w.min_interval_minutes > w.max_interval_minutes {
            return Err(ConfigError::InvertedIntervals {
                min: w.min_interval_minutes,
                max: w.max_interval_minutes,
            });
        }
        if w.work_start_hour > w.work_end_hour || w.work_end_hour > 23 {
            return Err(ConfigError::InvalidWorkHours {
                start: w.work_start_hour,
                end: w.work_end_hour,
            });
        }
        Ok(())
    }

    pub fn schedule_window(&self) -> ScheduleWindow {
        ScheduleWindow {
            start: self.window.start,
            end: self.window.end,
            min_interval: TimeDelta::minutes(self.window.min_interval_minutes),
            max_interval: TimeDelta::minutes(self.window.max_interval_minutes),
            work_hours: WorkHours {
                start: self.window.work_start_hour,
                end: self.window.work_end_hour,
            },
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            name: self.identity.name.clone(),
            email: self.identity.email.clone(),
        }
    }
}

/// Load and validate the run config for `repo_path`.
///
/// A missing `gitseed.toml` yields the defaults; an unreadable or invalid
/// one is an error rather than a silent fallback, since the whole run's
/// shape depends on it.
pub fn load_run_config(repo_path: &Path) -> Result<RunConfig> {
    let path = repo_path.join(CONFIG_FILE);

    let config = if path.exists() {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let parsed: RunConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded run config from {}", path.display());
        parsed
    } else {
        debug!("No {CONFIG_FILE} found, using defaults");
        RunConfig::default()
    };

    config
        .validate()
        .with_context(|| format!("Invalid configuration for {}", repo_path.display()))?;
    Ok(config)
}

fn default_datetime(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, 0, 0))
        .expect("built-in window constants are valid")
}
