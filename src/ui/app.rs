use crate::country::Country;
use crate::graphql::FetchError;
use crate::ui::body::BodyView;
use crate::ui::fetch::{FetchIntent, FetchReducer, FetchState};
use crate::ui::mvi::Reducer;
use crate::ui::search_box::{SearchBox, SearchEdit};
use crate::ui::table::{derive, Column, DerivedView, TableIntent, TableReducer, ViewState};
use tracing::{debug, warn};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Everything the screen shows, owned by the UI thread.
pub struct App {
    should_quit: bool,
    /// Fetch lifecycle (MVI pattern).
    fetch: FetchState,
    /// Search / sort / paging state (MVI pattern).
    view: ViewState,
    /// Projection of `fetch` through `view`, rebuilt after every dispatch.
    derived: DerivedView,
    search: SearchBox,
    /// Header cell that Enter sorts by.
    header_focus: Column,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

impl App {
    pub fn new(view: ViewState) -> Self {
        let mut app = Self {
            should_quit: false,
            fetch: FetchState::default(),
            search: SearchBox::with_text(&view.search_query),
            view,
            derived: DerivedView::default(),
            header_focus: Column::default(),
        };
        app.refresh();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn derived(&self) -> &DerivedView {
        &self.derived
    }

    pub fn search_box(&self) -> &SearchBox {
        &self.search
    }

    pub fn header_focus(&self) -> Column {
        self.header_focus
    }

    /// The one body branch to draw right now.
    pub fn body_view(&self) -> BodyView<'_> {
        BodyView::resolve(&self.fetch, &self.derived)
    }

    pub fn on_tick(&mut self) {
        if self.fetch.is_pending() {
            self.dispatch_fetch(FetchIntent::Tick);
        }
    }

    pub fn on_fetch_started(&mut self) {
        self.dispatch_fetch(FetchIntent::Started);
    }

    pub fn on_fetch_completed(&mut self, result: Result<Vec<Country>, FetchError>) {
        let intent = match result {
            Ok(countries) => {
                debug!(count = countries.len(), "fetch completed");
                FetchIntent::Loaded { countries }
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "showing fetch failure");
                FetchIntent::Failed {
                    message: err.user_message().to_string(),
                }
            }
        };
        self.dispatch_fetch(intent);
    }

    /// Applies a search box edit; text changes become a `SearchChanged`.
    pub fn on_search_edit(&mut self, edit: SearchEdit) {
        if !self.search.apply(edit) {
            return;
        }
        let intent = if self.search.is_empty() {
            TableIntent::SearchCleared
        } else {
            TableIntent::SearchChanged(self.search.text().to_string())
        };
        self.dispatch_table(intent);
    }

    pub fn focus_next_header(&mut self) {
        self.header_focus = self.header_focus.next();
    }

    pub fn focus_previous_header(&mut self) {
        self.header_focus = self.header_focus.previous();
    }

    /// Sorts by the focused header, as a click on it would.
    pub fn sort_by_focused_header(&mut self) {
        self.dispatch_table(TableIntent::SortRequested(self.header_focus));
        debug!(
            field = self.view.sort_field.path(),
            direction = ?self.view.sort_direction,
            "sort applied"
        );
    }

    pub fn next_page(&mut self) {
        let page_count = self.derived.page_count;
        self.dispatch_table(TableIntent::NextPage { page_count });
    }

    pub fn previous_page(&mut self) {
        self.dispatch_table(TableIntent::PreviousPage);
    }

    pub fn first_page(&mut self) {
        self.dispatch_table(TableIntent::PageChanged(0));
    }

    pub fn last_page(&mut self) {
        let last = self.derived.last_page();
        self.dispatch_table(TableIntent::PageChanged(last));
    }

    pub fn cycle_page_size(&mut self) {
        let next = self.view.page_size.cycle();
        self.dispatch_table(TableIntent::PageSizeChanged(next));
    }

    pub fn dispatch_table(&mut self, intent: TableIntent) {
        dispatch_mvi!(self, view, TableReducer, intent);
        self.refresh();
    }

    fn dispatch_fetch(&mut self, intent: FetchIntent) {
        dispatch_mvi!(self, fetch, FetchReducer, intent);
        self.refresh();
    }

    /// Re-derives the visible page and stores any page-index correction.
    fn refresh(&mut self) {
        let derived = derive(self.fetch.records(), &self.view);
        if derived.was_corrected(&self.view) {
            debug!(
                from = self.view.page_index,
                page_count = derived.page_count,
                "page index out of range, resetting"
            );
            dispatch_mvi!(
                self,
                view,
                TableReducer,
                TableIntent::PageChanged(derived.page_index)
            );
        }
        self.derived = derived;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("US", "United States", "North America"),
            Country::new("FR", "France", "Europe"),
        ]
    }

    #[test]
    fn typing_narrows_results() {
        let mut app = App::default();
        app.on_fetch_completed(Ok(sample()));
        for ch in "amer".chars() {
            app.on_search_edit(SearchEdit::Insert(ch));
        }
        assert_eq!(app.view_state().search_query, "amer");
        assert_eq!(app.derived().total_item_count, 1);
        assert_eq!(app.derived().page_of_items[0].code, "US");
    }

    #[test]
    fn clearing_search_restores_all_rows() {
        let mut app = App::new(ViewState::default().with_search_query("fr"));
        app.on_fetch_completed(Ok(sample()));
        assert_eq!(app.derived().total_item_count, 1);
        app.on_search_edit(SearchEdit::Clear);
        assert_eq!(app.derived().total_item_count, 2);
        assert!(app.view_state().search_query.is_empty());
    }

    #[test]
    fn focused_header_sorts_by_its_field() {
        let mut app = App::default();
        app.on_fetch_completed(Ok(sample()));
        app.focus_next_header();
        app.sort_by_focused_header();
        assert_eq!(app.view_state().sort_field.path(), "name");
        assert_eq!(app.derived().page_of_items[0].code, "US");
    }

    #[test]
    fn tick_is_ignored_once_loaded() {
        let mut app = App::default();
        app.on_fetch_completed(Ok(sample()));
        let before = app.fetch_state().clone();
        app.on_tick();
        assert_eq!(app.fetch_state(), &before);
    }
}
