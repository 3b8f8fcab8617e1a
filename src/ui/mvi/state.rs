//! Marker trait for feature state.

/// Feature state owned by [`crate::ui::app::App`].
///
/// `Default` is the mount-time value; `PartialEq` lets tests and the app
/// compare before/after a reduction.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
