//! Base trait for intents in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents describe a requested state change. They carry data only and
/// never touch state themselves:
/// - User choices (picking an interval, pausing refresh)
/// - Requests replayed from another process or a file
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Debug + Send + 'static {
    /// Stable name of the intent, used when logging dispatches.
    fn name(&self) -> &'static str;
}
