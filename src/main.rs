//! counter-view - a counter advanced by a remote endpoint.
//!
//! Interactive by default; `counter-view click -n N` clicks headlessly and
//! prints the resulting view.

#![forbid(unsafe_code)]

use std::io;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use bubbletea::Program;
use clap::Parser;
use counter_view::app::CounterView;
use counter_view::cli::{Cli, Command};
use counter_view::config::Config;
use counter_view::headless;
use counter_view::http::Client;
use counter_view::remote::HttpCounterSource;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let client = Client::new()?.with_timeout(config.request_timeout);
    let source = Arc::new(HttpCounterSource::new(client, config.endpoint.clone()));
    tracing::debug!(endpoint = %source.endpoint(), "counter source ready");
    let counter = CounterView::new(source, runtime.handle().clone()).with_theme(config.theme);

    match cli.command {
        Some(Command::Click { times }) => {
            let mut counter = counter;
            let count = headless::click(&mut counter, times);
            println!("{}", headless::report(count));
            Ok(())
        }
        None => run_interactive(&runtime, counter, &config),
    }
}

fn run_interactive(runtime: &Runtime, counter: CounterView, config: &Config) -> Result<()> {
    let mut program = Program::new(counter);
    if config.alt_screen {
        program = program.with_alt_screen();
    }
    if config.mouse {
        program = program.with_mouse_cell_motion();
    }

    let counter = runtime
        .block_on(program.run_async())
        .map_err(|e| anyhow!(e.to_string()))?;
    tracing::debug!(count = counter.count(), "counter view closed");
    Ok(())
}
