//! Terminal country browser: fetches the country list from a GraphQL
//! endpoint once, then searches, sorts and pages it client-side.

pub mod cli;
pub mod config;
pub mod country;
pub mod graphql;
pub mod logging;
pub mod ui;
