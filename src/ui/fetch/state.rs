//! State of the country fetch.

use std::sync::Arc;

use crate::country::Country;
use crate::ui::mvi::UiState;

/// Braille spinner shown while the fetch is in flight.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Lifecycle of the single country fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// Request in flight, no data and no error yet.
    Pending {
        /// Animation tick for the spinner.
        spinner_tick: u8,
    },

    /// Request failed. Terminal for this session.
    Failed {
        /// User-facing message.
        message: String,
    },

    /// Records arrived. Read-only from here on.
    Succeeded { countries: Arc<[Country]> },
}

impl Default for FetchState {
    fn default() -> Self {
        Self::Pending { spinner_tick: 0 }
    }
}

impl UiState for FetchState {}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Fetched records; empty unless the fetch succeeded.
    pub fn records(&self) -> &[Country] {
        match self {
            Self::Succeeded { countries } => &countries[..],
            _ => &[],
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        match self {
            Self::Pending { spinner_tick } => {
                SPINNER_FRAMES[usize::from(*spinner_tick) % SPINNER_FRAMES.len()]
            }
            _ => SPINNER_FRAMES[0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_default() {
        assert_eq!(FetchState::default(), FetchState::Pending { spinner_tick: 0 });
        assert!(FetchState::default().is_pending());
    }

    #[test]
    fn records_only_when_succeeded() {
        assert!(FetchState::default().records().is_empty());
        assert!(FetchState::Failed {
            message: "x".into()
        }
        .records()
        .is_empty());

        let loaded = FetchState::Succeeded {
            countries: vec![Country::new("FR", "France", "Europe")].into(),
        };
        assert_eq!(loaded.records().len(), 1);
        assert_eq!(loaded.error_message(), None);
    }

    #[test]
    fn spinner_wraps() {
        let state = FetchState::Pending { spinner_tick: 11 };
        assert_eq!(state.spinner_frame(), SPINNER_FRAMES[1]);
    }
}
