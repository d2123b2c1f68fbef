//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to keep a snapshot, reducers return new values)
/// - Self-contained (everything a view or timer needs to read)
/// - Comparable (PartialEq so a store can tell whether a dispatch changed anything)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
