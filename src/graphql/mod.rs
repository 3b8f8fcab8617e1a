//! GraphQL transport for the country list.
//!
//! ```text
//! CountryClient::fetch_countries ─POST { countries { code name continent { name } } }─→ endpoint
//!                                ←── { data: { countries: [...] } } | { errors: [...] } ──
//! ```

mod client;
mod error;
mod query;

pub use client::CountryClient;
pub use error::{FetchError, FETCH_FAILED_MESSAGE};
pub use query::{decode_countries, GraphqlRequest, COUNTRIES_QUERY};
