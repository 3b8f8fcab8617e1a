//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod mock_graphql;

use country_table::country::Country;
use country_table::ui::app::App;
use country_table::ui::table::ViewState;

pub fn us() -> Country {
    Country::new("US", "United States", "North America")
}

pub fn fr() -> Country {
    Country::new("FR", "France", "Europe")
}

/// The two-record set used by the documented scenarios, in fetch order.
pub fn us_fr() -> Vec<Country> {
    vec![us(), fr()]
}

/// A larger set with repeated continents, in fetch order.
pub fn world() -> Vec<Country> {
    vec![
        Country::new("AD", "Andorra", "Europe"),
        Country::new("AR", "Argentina", "South America"),
        Country::new("AU", "Australia", "Oceania"),
        Country::new("BR", "Brazil", "South America"),
        Country::new("CA", "Canada", "North America"),
        Country::new("CN", "China", "Asia"),
        Country::new("DE", "Germany", "Europe"),
        Country::new("EG", "Egypt", "Africa"),
        Country::new("FR", "France", "Europe"),
        Country::new("IN", "India", "Asia"),
        Country::new("JP", "Japan", "Asia"),
        Country::new("KE", "Kenya", "Africa"),
        Country::new("MX", "Mexico", "North America"),
        Country::new("NG", "Nigeria", "Africa"),
        Country::new("NZ", "New Zealand", "Oceania"),
        Country::new("US", "United States", "North America"),
        Country::new("ZA", "South Africa", "Africa"),
    ]
}

/// `count` synthetic records with unique codes.
pub fn many(count: usize) -> Vec<Country> {
    (0..count)
        .map(|i| Country::new(format!("C{:03}", i), format!("Country {}", i), "Europe"))
        .collect()
}

pub fn codes(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(|c| c.code.as_str()).collect()
}

pub fn loaded_app(records: Vec<Country>, view: ViewState) -> App {
    let mut app = App::new(view);
    app.on_fetch_completed(Ok(records));
    app
}
