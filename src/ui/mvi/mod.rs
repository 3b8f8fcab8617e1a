//! Model-View-Intent (MVI) primitives shared by the table and fetch features.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ derive ──→ View
//!    ↑                                        │
//!    └────────────────────────────────────────┘
//! ```
//!
//! - **State**: owned value describing one feature (fetch lifecycle, view state)
//! - **Intent**: key press, fetch completion, timer tick
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
