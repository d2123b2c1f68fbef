//! Dashboard auto-refresh feature module.
//!
//! Tracks whether the dashboard refreshes itself and how often. Nothing
//! here schedules a refresh: a timer outside this module reads
//! [`AutoRefreshState::refresh_period`] and acts on it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Status enum (Active / Disabled / Paused) plus interval
//! - `intent.rs` - SetInterval / SetStatus and their constructors
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `request.rs` - `{type, payload}` JSON form of intents

mod intent;
mod reducer;
mod request;
mod state;

pub use intent::{set_auto_refresh_interval, set_auto_refresh_status, AutoRefreshIntent};
pub use reducer::AutoRefreshReducer;
pub use request::{Request, RequestError};
pub use state::{AutoRefreshState, AutoRefreshStatus, ParseStatusError};
