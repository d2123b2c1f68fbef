//! Central store owning the dashboard's auto-refresh state.

use tracing::debug;

use crate::config::AutoRefreshDefaults;
use crate::ui::auto_refresh::{
    AutoRefreshIntent, AutoRefreshReducer, AutoRefreshState, Request, RequestError,
};
use crate::ui::mvi::{Intent, Reducer};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct DashboardStore {
    /// Auto-refresh state (MVI pattern).
    auto_refresh: AutoRefreshState,
    defaults: AutoRefreshDefaults,
}

impl DashboardStore {
    pub fn new(defaults: AutoRefreshDefaults) -> Self {
        Self {
            auto_refresh: AutoRefreshState::from_defaults(&defaults),
            defaults,
        }
    }

    pub fn state(&self) -> &AutoRefreshState {
        &self.auto_refresh
    }

    pub fn defaults(&self) -> &AutoRefreshDefaults {
        &self.defaults
    }

    /// Run `intent` through the reducer. Returns true if the state changed.
    pub fn dispatch(&mut self, intent: AutoRefreshIntent) -> bool {
        let previous = self.auto_refresh;
        let name = intent.name();
        dispatch_mvi!(self, auto_refresh, AutoRefreshReducer, intent);
        let changed = self.auto_refresh != previous;
        debug!(
            intent = name,
            status = %self.auto_refresh.status,
            interval = self.auto_refresh.interval,
            changed,
            "Dispatched auto-refresh intent"
        );
        changed
    }

    /// Dispatch a decoded request. Unrecognized requests leave state as is.
    pub fn dispatch_request(&mut self, request: Request) -> bool {
        match request {
            Request::AutoRefresh(intent) => self.dispatch(intent),
            Request::Unrecognized { kind } => {
                debug!(kind = %kind, "Ignoring unrecognized request");
                false
            }
        }
    }

    /// Decode one JSON request and dispatch it.
    pub fn dispatch_json(&mut self, json: &str) -> Result<bool, RequestError> {
        let request = Request::decode(json)?;
        Ok(self.dispatch_request(request))
    }
}
