use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::EndpointConfig;
use crate::country::Country;
use crate::graphql::error::FetchError;
use crate::graphql::query::{decode_countries, GraphqlRequest};

/// Longest slice of an error body kept in `FetchError::HttpStatus`.
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for the countries GraphQL endpoint.
///
/// Issues exactly one kind of request. There is no retry and no caching;
/// a failed fetch stays failed.
#[derive(Debug, Clone)]
pub struct CountryClient {
    client: Client,
    endpoint: String,
}

impl CountryClient {
    pub fn new(config: &EndpointConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint: config.url.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the full country list.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching countries");

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&GraphqlRequest::countries())
            .send()
            .await
            .map_err(|source| self.transport(source))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = FetchError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(body),
            };
            warn!(kind = err.kind(), error = %err, "country fetch failed");
            return Err(err);
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.transport(source))?;

        match decode_countries(&body) {
            Ok(countries) => {
                info!(count = countries.len(), "countries loaded");
                Ok(countries)
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "country fetch failed");
                Err(err)
            }
        }
    }

    fn transport(&self, source: reqwest::Error) -> FetchError {
        let err = FetchError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        };
        warn!(kind = err.kind(), error = %err, "country fetch failed");
        err
    }
}

fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
