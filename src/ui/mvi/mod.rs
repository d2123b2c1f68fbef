//! Model-View-Intent (MVI) architecture primitives.
//!
//! Unidirectional data flow for UI state:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View / Timer
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of one slice of UI state
//! - **Intent**: Description of a requested change
//! - **Reducer**: Pure function that computes the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
