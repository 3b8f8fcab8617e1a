//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Applies intents to a state.
///
/// Reducers are the only place state transitions happen, and they must not
/// perform I/O. Anything effectful (spawning the fetch, drawing) lives in
/// the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
