//! Configuration: the GraphQL endpoint and the table's startup defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, TableConfig, DEFAULT_ENDPOINT};
