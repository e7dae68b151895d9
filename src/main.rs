//! # Lunch Menus
//!
//! Scrapes today's lunch menus from the configured restaurants and either
//! prints a single HTML page or serves it over HTTP.
//!
//! ## Usage
//!
//! ```sh
//! lunch_menus --html-output menu.html -j menu.json
//! lunch_menus --serve --port 3000
//! ```

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use lunch_menus::cli::Cli;
use lunch_menus::clock::{Clock, FixedClock, SystemClock};
use lunch_menus::fetcher::HttpFetcher;
use lunch_menus::outputs::{html, json};
use lunch_menus::server::{self, AppState};
use lunch_menus::aggregate_today;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("lunch_menus starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Registry problems (unknown parser keys, bad urls) are fatal here,
    // before anything is fetched.
    let registry = match args.registry() {
        Ok(registry) => registry,
        Err(e) => {
            error!(error = %e, "Invalid source registry");
            return Err(e.into());
        }
    };
    info!(sources = registry.len(), "Source registry ready");

    let fetcher = HttpFetcher::with_timeout(args.timeout())?;
    let clock: Arc<dyn Clock> = match args.date {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    };
    let options = args.aggregate_options();

    if args.serve {
        let addr = args.bind_addr();
        let state = Arc::new(AppState {
            registry,
            fetcher,
            clock,
            options,
        });
        server::serve(state, &addr).await?;
        return Ok(());
    }

    let board = aggregate_today(&registry, &fetcher, clock.as_ref(), &options).await;

    let page = html::render_board(&board);
    match &args.html_output {
        Some(path) => {
            tokio::fs::write(path, page).await?;
            info!(path = %path.display(), "Wrote HTML page");
        }
        None => println!("{page}"),
    }

    if let Some(path) = &args.json_output {
        if let Err(e) = json::write_board(&board, path).await {
            error!(path = %path.display(), error = %e, "Failed to write JSON");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        sources = board.results.len(),
        items = board.item_count(),
        failed = board.failed_count(),
        "Execution complete"
    );
    Ok(())
}
