pub mod app;
pub mod body;
pub mod events;
pub mod fetch;
pub mod flag;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search_box;
pub mod table;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
