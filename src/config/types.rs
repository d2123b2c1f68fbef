use serde::{Deserialize, Serialize};

use crate::ui::auto_refresh::AutoRefreshStatus;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auto_refresh: AutoRefreshDefaults,
}

/// Initial auto-refresh settings for a fresh dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoRefreshDefaults {
    /// Status a new dashboard starts in (default: paused).
    #[serde(default = "default_status")]
    pub status: AutoRefreshStatus,
    /// Refresh interval in milliseconds (default: 0).
    #[serde(default = "default_interval")]
    pub interval: f64,
}

pub const AUTOREFRESH_DEFAULT_STATUS: AutoRefreshStatus = AutoRefreshStatus::Paused;
pub const AUTOREFRESH_DEFAULT_INTERVAL: f64 = 0.0;

fn default_status() -> AutoRefreshStatus {
    AUTOREFRESH_DEFAULT_STATUS
}

fn default_interval() -> f64 {
    AUTOREFRESH_DEFAULT_INTERVAL
}

impl Default for AutoRefreshDefaults {
    fn default() -> Self {
        Self {
            status: default_status(),
            interval: default_interval(),
        }
    }
}
