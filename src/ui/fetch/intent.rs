//! Intents for the country fetch.

use crate::country::Country;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FetchIntent {
    /// Request has been issued.
    Started,

    /// Animation tick (spinner).
    Tick,

    /// Request succeeded.
    Loaded { countries: Vec<Country> },

    /// Request failed; `message` is what the user sees.
    Failed { message: String },
}

impl Intent for FetchIntent {}
