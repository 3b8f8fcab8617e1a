use anyhow::Context;
use clap::Parser;
use country_table::cli::Cli;
use country_table::config::Config;
use country_table::graphql::CountryClient;
use country_table::logging::init_tracing;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "fatal");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(path) = init_tracing() {
        info!(path = %path.display(), "logging enabled");
    }

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid command-line override")?;

    let client = CountryClient::new(&config.endpoint).context("creating GraphQL client")?;
    let view = cli.initial_view(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("starting async runtime")?;

    country_table::ui::run(runtime.handle(), client, view, config.table.tick_rate())
        .context("terminal UI failed")?;

    // Don't wait on a fetch that is still in flight.
    runtime.shutdown_background();
    Ok(())
}
