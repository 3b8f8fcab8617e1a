//! Reducer for the country table.

use crate::ui::mvi::Reducer;

use super::intent::TableIntent;
use super::state::ViewState;

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = ViewState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::SearchChanged(query) => ViewState {
                search_query: query,
                ..state
            },

            TableIntent::SearchCleared => ViewState {
                search_query: String::new(),
                ..state
            },

            TableIntent::SortRequested(column) => match column.sort_field() {
                Some(field) => ViewState {
                    sort_field: field,
                    sort_direction: state.sort_direction.flipped(),
                    ..state
                },
                None => state,
            },

            TableIntent::PageSizeChanged(page_size) => ViewState {
                page_size,
                page_index: 0,
                ..state
            },

            TableIntent::PageChanged(page_index) => ViewState {
                page_index,
                ..state
            },

            TableIntent::NextPage { page_count } => {
                let last = page_count.saturating_sub(1);
                let page_index = if state.page_index < last {
                    state.page_index + 1
                } else {
                    state.page_index
                };
                ViewState {
                    page_index,
                    ..state
                }
            }

            TableIntent::PreviousPage => ViewState {
                page_index: state.page_index.saturating_sub(1),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::table::column::{Column, SortField};
    use crate::ui::table::state::{PageSize, SortDirection};

    #[test]
    fn sort_on_flag_is_noop() {
        let state = ViewState::default();
        let new_state = TableReducer::reduce(state.clone(), TableIntent::SortRequested(Column::Flag));
        assert_eq!(new_state, state);
    }

    #[test]
    fn sort_flips_direction_even_when_switching_field() {
        let state = ViewState::default();
        let new_state =
            TableReducer::reduce(state, TableIntent::SortRequested(Column::Continent));
        assert_eq!(new_state.sort_field, SortField::ContinentName);
        assert_eq!(new_state.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn next_page_stops_at_last() {
        let state = ViewState {
            page_index: 2,
            ..ViewState::default()
        };
        let new_state = TableReducer::reduce(state, TableIntent::NextPage { page_count: 3 });
        assert_eq!(new_state.page_index, 2);
    }

    #[test]
    fn page_size_change_resets_page() {
        let state = ViewState {
            page_index: 4,
            ..ViewState::default()
        };
        let new_state =
            TableReducer::reduce(state, TableIntent::PageSizeChanged(PageSize::Hundred));
        assert_eq!(new_state.page_index, 0);
        assert_eq!(new_state.page_size, PageSize::Hundred);
    }
}
