//! Model-View-Intent (MVI) primitives for view-local state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a view (e.g. a quiz attempt)
//! - **Intent**: a key press or a new result arriving
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
