//! Country table feature: search, sort and paging over the fetched records.
//!
//! Uses MVI:
//! - `state.rs` - `ViewState` and its enumerations
//! - `intent.rs` - search / sort / page interactions
//! - `reducer.rs` - state transitions
//! - `derive.rs` - filter → sort → paginate → clamp
//! - `column.rs` - header cells and typed sort accessors

mod column;
mod derive;
mod intent;
mod reducer;
mod state;

pub use column::{Column, SortField};
pub use derive::{clamp_page_index, compare, derive, filter, page_count, paginate, sort, DerivedView};
pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{InvalidPageSize, PageSize, SortDirection, ViewState};
