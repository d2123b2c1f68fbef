//! Wire form of auto-refresh requests.
//!
//! Requests arrive as `{"type": "...", "payload": {...}}`. Known types
//! decode into [`AutoRefreshIntent`]; any other type is kept as
//! [`Request::Unrecognized`] so the store can ignore it without failing.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::intent::{AutoRefreshIntent, SET_INTERVAL, SET_STATUS};
use super::state::AutoRefreshStatus;

/// Errors that can occur when decoding a request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid payload for {kind}: {source}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A decoded request.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    AutoRefresh(AutoRefreshIntent),

    /// A request type this slice does not handle.
    Unrecognized { kind: String },
}

#[derive(Deserialize)]
struct RawRequest {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
struct IntervalPayload {
    milliseconds: f64,
}

#[derive(Deserialize)]
struct StatusPayload {
    status: AutoRefreshStatus,
}

impl Request {
    /// Decode one request from JSON text.
    pub fn decode(json: &str) -> Result<Self, RequestError> {
        let raw: RawRequest = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Decode one request from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, RequestError> {
        let raw: RawRequest = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawRequest) -> Result<Self, RequestError> {
        let intent = match raw.kind.as_str() {
            SET_INTERVAL => {
                let payload: IntervalPayload = serde_json::from_value(raw.payload)
                    .map_err(|source| RequestError::InvalidPayload {
                        kind: SET_INTERVAL,
                        source,
                    })?;
                AutoRefreshIntent::SetInterval {
                    milliseconds: payload.milliseconds,
                }
            }
            SET_STATUS => {
                let payload: StatusPayload = serde_json::from_value(raw.payload)
                    .map_err(|source| RequestError::InvalidPayload {
                        kind: SET_STATUS,
                        source,
                    })?;
                AutoRefreshIntent::SetStatus {
                    status: payload.status,
                }
            }
            _ => return Ok(Request::Unrecognized { kind: raw.kind }),
        };
        Ok(Request::AutoRefresh(intent))
    }

    /// The request's `type` tag.
    pub fn kind(&self) -> &str {
        match self {
            Request::AutoRefresh(AutoRefreshIntent::SetInterval { .. }) => SET_INTERVAL,
            Request::AutoRefresh(AutoRefreshIntent::SetStatus { .. }) => SET_STATUS,
            Request::Unrecognized { kind } => kind,
        }
    }
}

impl From<AutoRefreshIntent> for Request {
    fn from(intent: AutoRefreshIntent) -> Self {
        Request::AutoRefresh(intent)
    }
}

impl AutoRefreshIntent {
    /// Encode as a request JSON string.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
