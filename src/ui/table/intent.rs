//! Intents for the country table.

use crate::ui::mvi::Intent;
use crate::ui::table::column::Column;
use crate::ui::table::state::PageSize;

/// Interactions that change the table's [`ViewState`](super::ViewState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIntent {
    /// Search box text changed. Does not touch the page index.
    SearchChanged(String),

    /// Search box clear affordance.
    SearchCleared,

    /// Header activated. Sets the sort field and flips the direction;
    /// a no-op for columns without a sort field.
    SortRequested(Column),

    /// Rows-per-page picker. Resets to the first page.
    PageSizeChanged(PageSize),

    /// Jump straight to a page.
    PageChanged(usize),

    /// One page forward, stopping at the last page.
    NextPage { page_count: usize },

    /// One page back, stopping at the first page.
    PreviousPage,
}

impl Intent for TableIntent {}
