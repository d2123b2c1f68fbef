//! State for dashboard auto-refresh.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::config::AutoRefreshDefaults;
use crate::ui::mvi::UiState;

/// Whether the dashboard is currently refreshing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoRefreshStatus {
    /// Refresh runs on the configured interval.
    Active,

    /// Refresh was turned off explicitly.
    Disabled,

    /// Refresh is suspended because the interval was set to zero.
    Paused,
}

impl AutoRefreshStatus {
    pub const ALL: [AutoRefreshStatus; 3] = [Self::Active, Self::Disabled, Self::Paused];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for AutoRefreshStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown auto-refresh status '{value}' (expected active, disabled or paused)")]
pub struct ParseStatusError {
    pub value: String,
}

impl FromStr for AutoRefreshStatus {
    type Err = ParseStatusError;

    /// Accepts exactly the serialized names: `active`, `disabled`, `paused`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError {
                value: s.to_string(),
            })
    }
}

/// Largest integer an f64 holds exactly (2^53 - 1).
const MAX_EXACT_MILLIS: f64 = 9_007_199_254_740_991.0;

/// Writes whole-number milliseconds as JSON integers, anything else as a float.
pub(crate) fn serialize_millis<S: Serializer>(ms: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if ms.fract() == 0.0 && ms.abs() <= MAX_EXACT_MILLIS {
        serializer.serialize_i64(*ms as i64)
    } else {
        serializer.serialize_f64(*ms)
    }
}

/// Auto-refresh slice of the dashboard state.
///
/// `interval` is in milliseconds and is stored exactly as requested:
/// negative, fractional and signed-zero values included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoRefreshState {
    pub status: AutoRefreshStatus,
    #[serde(serialize_with = "serialize_millis")]
    pub interval: f64,
}

impl Default for AutoRefreshState {
    fn default() -> Self {
        Self::from_defaults(&AutoRefreshDefaults::default())
    }
}

impl UiState for AutoRefreshState {}

impl AutoRefreshState {
    /// Initial state built from configured defaults.
    pub fn from_defaults(defaults: &AutoRefreshDefaults) -> Self {
        Self {
            status: defaults.status,
            interval: defaults.interval,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AutoRefreshStatus::Active
    }

    pub fn is_paused(&self) -> bool {
        self.status == AutoRefreshStatus::Paused
    }

    pub fn is_disabled(&self) -> bool {
        self.status == AutoRefreshStatus::Disabled
    }

    /// Period an external timer should refresh at, if any.
    ///
    /// `None` unless refresh is active with a positive, representable interval.
    pub fn refresh_period(&self) -> Option<Duration> {
        if !self.is_active() || self.interval.is_nan() || self.interval <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(self.interval / 1000.0).ok()
    }
}
