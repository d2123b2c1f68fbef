//! Reducer for dashboard auto-refresh.

use crate::config::AutoRefreshDefaults;
use crate::ui::mvi::Reducer;

use super::intent::AutoRefreshIntent;
use super::state::{AutoRefreshState, AutoRefreshStatus};

/// Reducer for auto-refresh state transitions.
///
/// A zero interval forces `Paused`. A non-zero interval leaves the status
/// alone, so resuming after a pause always takes an explicit `SetStatus`.
pub struct AutoRefreshReducer;

impl Reducer for AutoRefreshReducer {
    type State = AutoRefreshState;
    type Intent = AutoRefreshIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AutoRefreshIntent::SetInterval { milliseconds } => {
                // True for -0.0 as well.
                let status = if milliseconds == 0.0 {
                    AutoRefreshStatus::Paused
                } else {
                    state.status
                };
                AutoRefreshState {
                    status,
                    interval: milliseconds,
                }
            }

            AutoRefreshIntent::SetStatus { status } => AutoRefreshState { status, ..state },
        }
    }
}

impl AutoRefreshReducer {
    /// Reduce, starting from `defaults` when there is no state yet.
    pub fn reduce_from(
        state: Option<AutoRefreshState>,
        defaults: &AutoRefreshDefaults,
        intent: AutoRefreshIntent,
    ) -> AutoRefreshState {
        let state = state.unwrap_or_else(|| AutoRefreshState::from_defaults(defaults));
        Self::reduce(state, intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::auto_refresh::intent::{set_auto_refresh_interval, set_auto_refresh_status};

    fn state(status: AutoRefreshStatus, interval: f64) -> AutoRefreshState {
        AutoRefreshState { status, interval }
    }

    #[test]
    fn zero_interval_pauses_from_every_status() {
        for status in AutoRefreshStatus::ALL {
            let new =
                AutoRefreshReducer::reduce(state(status, 5000.0), set_auto_refresh_interval(0.0));
            assert_eq!(new, state(AutoRefreshStatus::Paused, 0.0), "from {status}");
        }
    }

    #[test]
    fn negative_zero_interval_pauses() {
        let new = AutoRefreshReducer::reduce(
            state(AutoRefreshStatus::Active, 5000.0),
            set_auto_refresh_interval(-0.0),
        );
        assert!(new.is_paused());
        assert_eq!(new.interval, 0.0);
        assert!(new.interval.is_sign_negative());
    }

    #[test]
    fn nonzero_interval_keeps_status() {
        for status in AutoRefreshStatus::ALL {
            let new = AutoRefreshReducer::reduce(
                state(status, 1000.0),
                set_auto_refresh_interval(3000.0),
            );
            assert_eq!(new, state(status, 3000.0));
        }
    }

    #[test]
    fn nonzero_interval_does_not_resume_paused() {
        let new = AutoRefreshReducer::reduce(
            state(AutoRefreshStatus::Paused, 0.0),
            set_auto_refresh_interval(10_000.0),
        );
        assert!(new.is_paused());
        assert_eq!(new.interval, 10_000.0);
    }

    #[test]
    fn status_keeps_interval() {
        for status in AutoRefreshStatus::ALL {
            let new = AutoRefreshReducer::reduce(
                state(AutoRefreshStatus::Active, 7500.0),
                set_auto_refresh_status(status),
            );
            assert_eq!(new, state(status, 7500.0));
        }
    }

    #[test]
    fn odd_intervals_are_stored_verbatim() {
        for ms in [-1.0, 1.5, -0.25, 1e20] {
            let new = AutoRefreshReducer::reduce(
                state(AutoRefreshStatus::Active, 1000.0),
                set_auto_refresh_interval(ms),
            );
            assert_eq!(new, state(AutoRefreshStatus::Active, ms));
        }
    }

    #[test]
    fn nan_interval_is_stored_and_keeps_status() {
        let new = AutoRefreshReducer::reduce(
            state(AutoRefreshStatus::Disabled, 1000.0),
            set_auto_refresh_interval(f64::NAN),
        );
        assert!(new.is_disabled());
        assert!(new.interval.is_nan());
    }

    #[test]
    fn reduce_from_none_uses_defaults() {
        let defaults = AutoRefreshDefaults {
            status: AutoRefreshStatus::Active,
            interval: 15_000.0,
        };
        let new = AutoRefreshReducer::reduce_from(
            None,
            &defaults,
            set_auto_refresh_status(AutoRefreshStatus::Disabled),
        );
        assert_eq!(new, state(AutoRefreshStatus::Disabled, 15_000.0));
    }

    #[test]
    fn reduce_from_some_ignores_defaults() {
        let new = AutoRefreshReducer::reduce_from(
            Some(state(AutoRefreshStatus::Disabled, 1000.0)),
            &AutoRefreshDefaults::default(),
            set_auto_refresh_interval(2000.0),
        );
        assert_eq!(new, state(AutoRefreshStatus::Disabled, 2000.0));
    }
}
