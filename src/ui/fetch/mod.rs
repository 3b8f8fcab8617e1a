//! Country fetch lifecycle (Pending → Succeeded | Failed).
//!
//! The reducer only records outcomes. Issuing the request is the runtime's
//! job; see [`crate::ui::runtime`].

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::{FetchState, SPINNER_FRAMES};
