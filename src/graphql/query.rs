//! Wire shapes for the single countries query.

use serde::{Deserialize, Serialize};

use crate::country::Country;
use crate::graphql::error::FetchError;

/// The only query this client issues. No variables: filtering, sorting and
/// paging all happen client-side on the full list.
pub const COUNTRIES_QUERY: &str = "{ countries { code name continent { name } } }";

/// Body of a GraphQL POST request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
}

impl GraphqlRequest {
    pub fn countries() -> Self {
        Self {
            query: COUNTRIES_QUERY,
        }
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CountriesData {
    pub countries: Vec<Country>,
}

impl<T> GraphqlResponse<T> {
    /// Unwraps `data`, treating any reported error as a failure even when
    /// partial data is present.
    pub fn into_data(self) -> Result<T, FetchError> {
        if !self.errors.is_empty() {
            return Err(FetchError::Graphql {
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }
        self.data.ok_or(FetchError::MissingData)
    }
}

/// Decodes a raw response body into the country list.
pub fn decode_countries(body: &[u8]) -> Result<Vec<Country>, FetchError> {
    let envelope: GraphqlResponse<CountriesData> = serde_json::from_slice(body)?;
    Ok(envelope.into_data()?.countries)
}
