//! Filter → sort → paginate → clamp.
//!
//! Pure functions over the fetched records and the current [`ViewState`].
//! The whole pipeline reruns on every state change; nothing is memoized.

use std::cmp::Ordering;

use crate::country::Country;
use crate::ui::table::column::SortField;
use crate::ui::table::state::{SortDirection, ViewState};

/// The visible projection of the records for one `ViewState`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedView {
    /// Page index after self-correction. Callers store this back.
    pub page_index: usize,
    pub page_of_items: Vec<Country>,
    /// Number of records matching the search query.
    pub total_item_count: usize,
    pub page_count: usize,
}

impl DerivedView {
    pub fn was_corrected(&self, view: &ViewState) -> bool {
        self.page_index != view.page_index
    }

    /// Last valid zero-based page, or 0 when there are no pages.
    pub fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }
}

/// Records whose code, name or continent name contains `query`,
/// ignoring case. Keeps fetch order.
pub fn filter<'a>(records: &'a [Country], query: &str) -> Vec<&'a Country> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|country| country.matches_lowercase(&needle))
        .collect()
}

/// Orders two records by `field` in `direction`.
pub fn compare(field: SortField, direction: SortDirection, a: &Country, b: &Country) -> Ordering {
    let ord = field.key(a).cmp(field.key(b));
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Sorts a copy of `records`. The sort is stable: records with equal keys
/// keep their input order in both directions.
pub fn sort<'a>(
    records: &[&'a Country],
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Country> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(field, direction, a, b));
    sorted
}

/// `ceil(total / page_size)`; zero when there is nothing to show.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slice of `records` for `page_index`. Empty when the page starts past the
/// end.
pub fn paginate<T>(records: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Self-correcting page index.
///
/// Resets to 0 only when `page_index` is strictly greater than
/// `page_count`; `page_index == page_count` is left alone.
pub fn clamp_page_index(page_index: usize, page_count: usize) -> usize {
    if page_index > page_count {
        0
    } else {
        page_index
    }
}

/// Runs the full pipeline for `view` over `records`.
pub fn derive(records: &[Country], view: &ViewState) -> DerivedView {
    let filtered = filter(records, &view.search_query);
    let sorted = sort(&filtered, view.sort_field, view.sort_direction);

    let page_size = view.page_size.get();
    let total_item_count = filtered.len();
    let page_count = page_count(total_item_count, page_size);
    let page_index = clamp_page_index(view.page_index, page_count);

    let page_of_items = paginate(&sorted, page_index, page_size)
        .iter()
        .map(|country| (*country).clone())
        .collect();

    DerivedView {
        page_index,
        page_of_items,
        total_item_count,
        page_count,
    }
}
