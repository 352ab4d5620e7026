//! Progression configuration value.
//!
//! # Responsibility
//! - Carry the dates, rates and category weights used by the engine.
//! - Deserialize the external camelCase configuration surface.
//!
//! # Invariants
//! - Configuration is an explicit value passed to every computation; there
//!   is no process-wide instance.
//! - Dates stay as configured strings; the engine parses them per call so an
//!   invalid date degrades the result instead of failing construction.
//! - `category_weight` is total: unknown categories map to
//!   `DEFAULT_CATEGORY_WEIGHT`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Weight applied to categories absent from `category_weights`.
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 0.5;

/// Configuration error reported by parsing or explicit validation.
#[derive(Debug)]
pub enum ConfigError {
    /// Input is not a valid configuration JSON document.
    Json(serde_json::Error),
    /// A configured date is neither `YYYY-MM-DD` nor RFC 3339.
    InvalidDate { field: &'static str, value: String },
    /// A numeric field is NaN or infinite.
    NonFiniteNumber(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid configuration json: {err}"),
            Self::InvalidDate { field, value } => {
                write!(f, "configuration field `{field}` is not a valid date: `{value}`")
            }
            Self::NonFiniteNumber(field) => {
                write!(f, "configuration field `{field}` must be a finite number")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidDate { .. } => None,
            Self::NonFiniteNumber(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Inputs of the progression formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressionConfig {
    /// Start of the study period; skill growth is measured from here.
    pub study_start_date: String,
    /// Start of the professional career. `None` means "starts now".
    pub career_start_date: Option<String>,
    /// Level points gained per elapsed day.
    pub growth_rate: f64,
    /// Reserved. Not consumed by any formula.
    pub difficulty_factor: f64,
    /// Upper-case category name to aggregate weight.
    pub category_weights: BTreeMap<String, f64>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        let category_weights = [
            ("FRONTEND", 0.05),
            ("BACKEND", 0.10),
            ("EMBEDDED", 0.15),
            ("OTHERS", 0.0005),
        ]
        .into_iter()
        .map(|(name, weight)| (name.to_string(), weight))
        .collect();

        Self {
            study_start_date: "2021-10-23".to_string(),
            career_start_date: Some("2024-11-14".to_string()),
            growth_rate: 0.000_000_001,
            difficulty_factor: 15.0,
            category_weights,
        }
    }
}

impl ProgressionConfig {
    /// Parses the JSON configuration surface. Missing fields keep defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Aggregate weight for `category`, falling back to the default weight.
    pub fn category_weight(&self, category: &str) -> f64 {
        lookup_or(&self.category_weights, category, DEFAULT_CATEGORY_WEIGHT)
    }

    /// Parsed study start, or `None` when the configured value is invalid.
    pub fn study_start(&self) -> Option<DateTime<Utc>> {
        parse_config_date(&self.study_start_date)
    }

    /// Parsed career start.
    ///
    /// - Outer `None`: the configured value is invalid.
    /// - `Some(None)`: no career start configured.
    pub fn career_start(&self) -> Option<Option<DateTime<Utc>>> {
        match self.career_start_date.as_deref() {
            None => Some(None),
            Some(raw) => parse_config_date(raw).map(Some),
        }
    }

    /// Checks dates and numbers. The engine does not require this; it
    /// degrades on its own, but callers loading config from disk can report
    /// problems early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.study_start().is_none() {
            return Err(ConfigError::InvalidDate {
                field: "studyStartDate",
                value: self.study_start_date.clone(),
            });
        }
        if self.career_start().is_none() {
            return Err(ConfigError::InvalidDate {
                field: "careerStartDate",
                value: self.career_start_date.clone().unwrap_or_default(),
            });
        }
        if !self.growth_rate.is_finite() {
            return Err(ConfigError::NonFiniteNumber("growthRate"));
        }
        if !self.difficulty_factor.is_finite() {
            return Err(ConfigError::NonFiniteNumber("difficultyFactor"));
        }
        if self.category_weights.values().any(|weight| !weight.is_finite()) {
            return Err(ConfigError::NonFiniteNumber("categoryWeights"));
        }
        Ok(())
    }
}

/// Total map lookup with an explicit default.
pub fn lookup_or(map: &BTreeMap<String, f64>, key: &str, default: f64) -> f64 {
    map.get(key).copied().unwrap_or(default)
}

/// Parses a configured date.
///
/// Accepts `YYYY-MM-DD` (interpreted as midnight UTC) and RFC 3339.
pub fn parse_config_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
