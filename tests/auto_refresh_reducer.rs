mod common;

use common::state;
use dash_refresh::config::{AutoRefreshDefaults, AUTOREFRESH_DEFAULT_INTERVAL};
use dash_refresh::ui::auto_refresh::{
    set_auto_refresh_interval, set_auto_refresh_status, AutoRefreshReducer, AutoRefreshStatus,
};
use dash_refresh::ui::mvi::Reducer;

use AutoRefreshStatus::{Active, Disabled, Paused};

// --- Scenarios ---

#[test]
fn active_set_interval_zero_pauses() {
    let new = AutoRefreshReducer::reduce(state(Active, 5000.0), set_auto_refresh_interval(0.0));
    assert_eq!(new, state(Paused, 0.0));
}

#[test]
fn paused_set_status_active_keeps_zero_interval() {
    let new = AutoRefreshReducer::reduce(state(Paused, 0.0), set_auto_refresh_status(Active));
    assert_eq!(new, state(Active, 0.0));
}

#[test]
fn disabled_set_interval_keeps_disabled() {
    let new =
        AutoRefreshReducer::reduce(state(Disabled, 1000.0), set_auto_refresh_interval(3000.0));
    assert_eq!(new, state(Disabled, 3000.0));
}

#[test]
fn missing_state_starts_from_default_interval() {
    let new = AutoRefreshReducer::reduce_from(
        None,
        &AutoRefreshDefaults::default(),
        set_auto_refresh_status(Disabled),
    );
    assert_eq!(new, state(Disabled, AUTOREFRESH_DEFAULT_INTERVAL));
}

// --- Properties over all statuses ---

#[test]
fn nonzero_interval_never_changes_status() {
    for status in AutoRefreshStatus::ALL {
        for ms in [1.0, 250.0, 60_000.0, -10.0, 0.5, -0.75] {
            let new =
                AutoRefreshReducer::reduce(state(status, 0.0), set_auto_refresh_interval(ms));
            assert_eq!(new.status, status);
            assert_eq!(new.interval, ms);
        }
    }
}

#[test]
fn zero_interval_always_pauses() {
    for status in AutoRefreshStatus::ALL {
        for previous in [0.0, 1000.0] {
            let new =
                AutoRefreshReducer::reduce(state(status, previous), set_auto_refresh_interval(0.0));
            assert_eq!(new, state(Paused, 0.0));
        }
    }
}

#[test]
fn status_request_never_changes_interval() {
    for from in AutoRefreshStatus::ALL {
        for to in AutoRefreshStatus::ALL {
            let new = AutoRefreshReducer::reduce(state(from, 4200.0), set_auto_refresh_status(to));
            assert_eq!(new, state(to, 4200.0));
        }
    }
}

#[test]
fn caller_snapshot_is_untouched() {
    let original = state(Active, 5000.0);
    let snapshot = original;

    let new = AutoRefreshReducer::reduce(original, set_auto_refresh_interval(0.0));

    assert_eq!(new, state(Paused, 0.0));
    assert_eq!(snapshot, state(Active, 5000.0));
}

// --- Sequences ---

#[test]
fn pause_then_resume_needs_explicit_status() {
    let state_after = AutoRefreshReducer::reduce_all(
        state(Active, 5000.0),
        [set_auto_refresh_interval(0.0), set_auto_refresh_interval(10_000.0)],
    );
    // Interval restored, still paused.
    assert_eq!(state_after, state(Paused, 10_000.0));

    let resumed = AutoRefreshReducer::reduce(state_after, set_auto_refresh_status(Active));
    assert_eq!(resumed, state(Active, 10_000.0));
    assert!(resumed.refresh_period().is_some());
}

#[test]
fn signed_zero_interval_pauses() {
    for status in AutoRefreshStatus::ALL {
        let new =
            AutoRefreshReducer::reduce(state(status, 2500.0), set_auto_refresh_interval(-0.0));
        assert_eq!(new.status, Paused);
        assert_eq!(new.interval, 0.0);
    }
}

#[test]
fn empty_intent_sequence_is_identity() {
    let start = state(Disabled, 30_000.0);
    let end = AutoRefreshReducer::reduce_all(start, std::iter::empty());
    assert_eq!(end, start);
}
