use country_table::ui::mvi::Reducer;
use country_table::ui::table::{
    Column, PageSize, SortDirection, SortField, TableIntent, TableReducer, ViewState,
};

fn on_page(page_index: usize) -> ViewState {
    ViewState {
        page_index,
        ..ViewState::default()
    }
}

#[test]
fn search_change_keeps_page_index() {
    let state = TableReducer::reduce(on_page(3), TableIntent::SearchChanged("eu".into()));
    assert_eq!(state.search_query, "eu");
    assert_eq!(state.page_index, 3);
}

#[test]
fn search_clear_empties_query() {
    let state = ViewState::default().with_search_query("asia");
    let state = TableReducer::reduce(state, TableIntent::SearchCleared);
    assert!(state.search_query.is_empty());
}

#[test]
fn sort_request_sets_field_and_flips() {
    let state = TableReducer::reduce(ViewState::default(), TableIntent::SortRequested(Column::Name));
    assert_eq!(state.sort_field, SortField::Name);
    assert_eq!(state.sort_direction, SortDirection::Descending);

    let state = TableReducer::reduce(state, TableIntent::SortRequested(Column::Name));
    assert_eq!(state.sort_direction, SortDirection::Ascending);
}

#[test]
fn first_click_on_default_column_sorts_descending() {
    let state = TableReducer::reduce(ViewState::default(), TableIntent::SortRequested(Column::Code));
    assert_eq!(state.sort_field, SortField::Code);
    assert_eq!(state.sort_direction, SortDirection::Descending);
}

#[test]
fn flag_header_is_not_sortable() {
    let state = ViewState {
        sort_field: SortField::Name,
        sort_direction: SortDirection::Descending,
        ..ViewState::default()
    };
    let new_state = TableReducer::reduce(state.clone(), TableIntent::SortRequested(Column::Flag));
    assert_eq!(new_state, state);
}

#[test]
fn sort_keeps_page_and_query() {
    let state = on_page(2).with_search_query("a");
    let state = TableReducer::reduce(state, TableIntent::SortRequested(Column::Continent));
    assert_eq!(state.page_index, 2);
    assert_eq!(state.search_query, "a");
    assert_eq!(state.sort_field, SortField::ContinentName);
}

#[test]
fn page_size_change_resets_to_first_page() {
    let state = TableReducer::reduce(on_page(5), TableIntent::PageSizeChanged(PageSize::Fifty));
    assert_eq!(state.page_size, PageSize::Fifty);
    assert_eq!(state.page_index, 0);
}

#[test]
fn page_change_is_taken_verbatim() {
    let state = TableReducer::reduce(ViewState::default(), TableIntent::PageChanged(42));
    assert_eq!(state.page_index, 42);
}

#[test]
fn next_page_advances_until_last() {
    let state = TableReducer::reduce(on_page(0), TableIntent::NextPage { page_count: 2 });
    assert_eq!(state.page_index, 1);
    let state = TableReducer::reduce(state, TableIntent::NextPage { page_count: 2 });
    assert_eq!(state.page_index, 1);
}

#[test]
fn next_page_without_pages_stays_put() {
    let state = TableReducer::reduce(on_page(0), TableIntent::NextPage { page_count: 0 });
    assert_eq!(state.page_index, 0);
}

#[test]
fn previous_page_saturates() {
    let state = TableReducer::reduce(on_page(1), TableIntent::PreviousPage);
    assert_eq!(state.page_index, 0);
    let state = TableReducer::reduce(state, TableIntent::PreviousPage);
    assert_eq!(state.page_index, 0);
}
