//! Replays newline-delimited JSON requests through a [`DashboardStore`].
//!
//! Each non-blank input line is one request. After every line the current
//! state is written as one JSON line, or only once at the end when
//! `final_only` is set.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{info, warn};

use crate::store::DashboardStore;
use crate::ui::auto_refresh::{Request, RequestError};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to write state: {0}")]
    Write(#[source] io::Error),

    #[error("Line {line}: {source}")]
    Request {
        line: usize,
        #[source]
        source: RequestError,
    },

    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Counts from one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub dispatched: usize,
    pub changed: usize,
    pub ignored: usize,
}

pub fn replay<R, W>(
    store: &mut DashboardStore,
    input: R,
    output: &mut W,
    final_only: bool,
) -> Result<ReplaySummary, ReplayError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ReplaySummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(ReplayError::Read)?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        let request = Request::decode(&line).map_err(|source| ReplayError::Request {
            line: line_no,
            source,
        })?;
        if let Request::Unrecognized { kind } = &request {
            warn!(line = line_no, kind = %kind, "Unrecognized request type, state unchanged");
            summary.ignored += 1;
        }

        summary.dispatched += 1;
        if store.dispatch_request(request) {
            summary.changed += 1;
        }

        if !final_only {
            write_state(store, output)?;
        }
    }

    if final_only {
        write_state(store, output)?;
    }
    output.flush().map_err(ReplayError::Write)?;

    info!(
        dispatched = summary.dispatched,
        changed = summary.changed,
        ignored = summary.ignored,
        "Replay finished"
    );
    Ok(summary)
}

fn write_state<W: Write>(store: &DashboardStore, output: &mut W) -> Result<(), ReplayError> {
    let json = serde_json::to_string(store.state())?;
    writeln!(output, "{}", json).map_err(ReplayError::Write)
}
