//! Typed user context snapshot.
//!
//! This module replaces the loosely-typed nested dictionaries of the original
//! telemetry feed with an explicit record type. Every categorical field is a
//! closed enum with a catch-all variant, so an unrecognized value scores
//! exactly like an absent one instead of being rejected.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Self-reported energy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    #[default]
    Medium,
    High,
    /// Any unrecognized value. Scores as "no adjustment".
    #[serde(other)]
    Other,
}

impl EnergyLevel {
    /// Parse from a raw string. Never fails; unknown values map to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => EnergyLevel::Low,
            "medium" => EnergyLevel::Medium,
            "high" => EnergyLevel::High,
            _ => EnergyLevel::Other,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
            EnergyLevel::Other => "other",
        }
    }
}

/// Self-reported stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    #[default]
    Medium,
    High,
    /// Any unrecognized value. Scores as "no adjustment".
    #[serde(other)]
    Other,
}

impl StressLevel {
    /// Parse from a raw string. Never fails; unknown values map to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => StressLevel::Low,
            "medium" => StressLevel::Medium,
            "high" => StressLevel::High,
            _ => StressLevel::Other,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Medium => "medium",
            StressLevel::High => "high",
            StressLevel::Other => "other",
        }
    }
}

/// Ambient noise level. Only `High` affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseLevel {
    Low,
    Medium,
    High,
    /// Absent or unrecognized. Scores as "no adjustment".
    #[default]
    #[serde(other)]
    Unknown,
}

impl NoiseLevel {
    /// Parse from a raw string. Never fails; unknown values map to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => NoiseLevel::Low,
            "medium" => NoiseLevel::Medium,
            "high" => NoiseLevel::High,
            _ => NoiseLevel::Unknown,
        }
    }
}

/// Where the user currently is. Only `Home` affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Office,
    /// Absent or unrecognized. Scores as "no adjustment".
    #[default]
    #[serde(other)]
    Other,
}

impl Location {
    /// Parse from a raw string. Never fails; unknown values map to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Location::Home,
            "office" => Location::Office,
            _ => Location::Other,
        }
    }
}

/// User state sub-record. Missing fields default to `Medium` independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub energy: EnergyLevel,
    #[serde(default)]
    pub stress: StressLevel,
}

/// Environment sub-record. Missing fields carry no scoring effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub noise: NoiseLevel,
    #[serde(default)]
    pub location: Location,
}

/// Snapshot of user state and environment at a point in time.
///
/// Immutable for the duration of one evaluation. The timestamp is required
/// and typed, so a malformed time is unrepresentable at this layer; raw
/// hour inputs are validated before construction (see [`UserContext::at_hour`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    /// When the snapshot was taken. Source of truth for the time-of-day
    /// adjustment.
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub state: UserState,
    #[serde(default)]
    pub environment: Environment,
}

impl UserContext {
    /// Create a context at the given timestamp with neutral state and
    /// environment.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            state: UserState::default(),
            environment: Environment::default(),
        }
    }

    /// Create a context for today at the given hour of day.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `hour` is not in `0..=23`.
    pub fn at_hour(hour: u32) -> Result<Self> {
        let timestamp = Utc::now()
            .date_naive()
            .and_hms_opt(hour, 0, 0)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "hour".to_string(),
                message: format!("{hour} is not a valid hour of day (0-23)"),
            })?
            .and_utc();
        Ok(Self::new(timestamp))
    }

    /// Hour of day (0-23) extracted from the timestamp.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}
