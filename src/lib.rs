//! Auto-refresh state for dashboards.
//!
//! A pure reducer over a tiny state machine (Active / Disabled / Paused
//! plus an interval), the intents that drive it, and a store that owns the
//! current value. Scheduling the refreshes themselves is left to the host.

pub mod config;
pub mod logging;
pub mod replay;
pub mod store;
pub mod ui;
