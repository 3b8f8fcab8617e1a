//! Marker trait for intents.

/// Something that happened and may change a feature's state.
///
/// Both user input (typing, header clicks, paging) and system events
/// (fetch finished, spinner tick) are intents. Intents cross the event
/// channel, hence `Send`.
pub trait Intent: Send + 'static {}
