//! Reducer for the country fetch.

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchState;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Started => FetchState::Pending { spinner_tick: 0 },

            FetchIntent::Tick => match state {
                FetchState::Pending { spinner_tick } => FetchState::Pending {
                    spinner_tick: spinner_tick.wrapping_add(1),
                },
                other => other,
            },

            FetchIntent::Loaded { countries } => FetchState::Succeeded {
                countries: countries.into(),
            },

            // A failure discards anything loaded before.
            FetchIntent::Failed { message } => FetchState::Failed { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Country;

    #[test]
    fn tick_only_animates_pending() {
        let state = FetchReducer::reduce(FetchState::default(), FetchIntent::Tick);
        assert_eq!(state, FetchState::Pending { spinner_tick: 1 });

        let failed = FetchState::Failed {
            message: "down".into(),
        };
        assert_eq!(FetchReducer::reduce(failed.clone(), FetchIntent::Tick), failed);
    }

    #[test]
    fn tick_wraps_around() {
        let state = FetchState::Pending { spinner_tick: u8::MAX };
        assert_eq!(
            FetchReducer::reduce(state, FetchIntent::Tick),
            FetchState::Pending { spinner_tick: 0 }
        );
    }

    #[test]
    fn failure_replaces_loaded_data() {
        let loaded = FetchReducer::reduce(
            FetchState::default(),
            FetchIntent::Loaded {
                countries: vec![Country::new("FR", "France", "Europe")],
            },
        );
        let failed = FetchReducer::reduce(
            loaded,
            FetchIntent::Failed {
                message: "Error loading data".into(),
            },
        );
        assert!(failed.records().is_empty());
        assert_eq!(failed.error_message(), Some("Error loading data"));
    }
}
