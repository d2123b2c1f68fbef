//! Intents for dashboard auto-refresh.

use serde::Serialize;

use crate::ui::mvi::Intent;

use super::state::AutoRefreshStatus;

pub const SET_INTERVAL: &str = "SET_AUTO_REFRESH_INTERVAL";
pub const SET_STATUS: &str = "SET_AUTO_REFRESH_STATUS";

/// Intents that can be dispatched to the auto-refresh reducer.
///
/// Serializes to the `{"type": ..., "payload": {...}}` request shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum AutoRefreshIntent {
    /// Change the refresh interval. Zero also pauses refresh.
    #[serde(rename = "SET_AUTO_REFRESH_INTERVAL")]
    SetInterval {
        #[serde(serialize_with = "crate::ui::auto_refresh::state::serialize_millis")]
        milliseconds: f64,
    },

    /// Change the status directly.
    #[serde(rename = "SET_AUTO_REFRESH_STATUS")]
    SetStatus { status: AutoRefreshStatus },
}

impl Intent for AutoRefreshIntent {
    fn name(&self) -> &'static str {
        match self {
            Self::SetInterval { .. } => SET_INTERVAL,
            Self::SetStatus { .. } => SET_STATUS,
        }
    }
}

/// Build a request to change the refresh interval.
///
/// No validation: negative, fractional and non-finite values are carried
/// through as given.
pub fn set_auto_refresh_interval(milliseconds: f64) -> AutoRefreshIntent {
    AutoRefreshIntent::SetInterval { milliseconds }
}

/// Build a request to change the refresh status.
pub fn set_auto_refresh_status(status: AutoRefreshStatus) -> AutoRefreshIntent {
    AutoRefreshIntent::SetStatus { status }
}
