use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::ui::table::{PageSize, ViewState};

/// Command-line overrides, applied on top of the config file.
#[derive(Debug, Default, Parser)]
#[command(
    name = "country-table",
    version,
    about = "Browse countries from a GraphQL endpoint in a searchable, sortable table"
)]
pub struct Cli {
    /// Override the GraphQL endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial rows per page (20, 50 or 100)
    #[arg(long, value_name = "ROWS")]
    pub page_size: Option<PageSize>,

    /// Initial search text
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,
}

impl Cli {
    /// Config file to read: `--config` or the platform default.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Applies overrides to a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.url = endpoint.clone();
        }
        if let Some(page_size) = self.page_size {
            config.table.page_size = page_size;
        }
    }

    /// Mount-time view state.
    pub fn initial_view(&self, config: &Config) -> ViewState {
        let view = ViewState::default().with_page_size(config.table.page_size);
        match &self.query {
            Some(query) => view.with_search_query(query.clone()),
            None => view,
        }
    }
}
