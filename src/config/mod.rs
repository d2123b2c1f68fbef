//! Configuration: the defaults a fresh dashboard starts from.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    AutoRefreshDefaults, Config, AUTOREFRESH_DEFAULT_INTERVAL, AUTOREFRESH_DEFAULT_STATUS,
};
