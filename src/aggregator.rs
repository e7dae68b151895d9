//! Runs every registered source through fetch and parse and assembles the
//! [`MenuBoard`].
//!
//! Sources are scraped concurrently (one future per source, at most
//! `concurrency` in flight) and the results come back in registry order.
//! A source that fails to fetch or times out becomes a failed
//! [`SourceResult`]; it never aborts the run.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use tracing::{debug, error, info, instrument, warn};

use crate::clock::Clock;
use crate::config::{Source, SourceRegistry};
use crate::error::FetchError;
use crate::fetcher::{DEFAULT_TIMEOUT, Fetcher};
use crate::models::{MenuBoard, SourceResult};
use crate::scrapers;
use crate::utils::truncate_for_log;

/// Knobs for one aggregation run.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Upper bound on each source's fetch.
    pub timeout: Duration,
    /// Sources scraped at the same time; `None` means all of them.
    pub concurrency: Option<usize>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            concurrency: None,
        }
    }
}

/// Scrape every source in `registry` for `reference_date`.
///
/// The returned board always has one result per source, in registry order.
#[instrument(level = "info", skip_all, fields(%reference_date, sources = registry.len()))]
pub async fn aggregate_all<F: Fetcher>(
    registry: &SourceRegistry,
    fetcher: &F,
    reference_date: NaiveDate,
    options: &AggregateOptions,
) -> MenuBoard {
    let t0 = Instant::now();
    let limit = options.concurrency.unwrap_or(registry.len()).max(1);
    let timeout = options.timeout;

    // `buffered` yields in input order regardless of completion order
    let results: Vec<SourceResult> = stream::iter(registry.iter().cloned())
        .map(|source| async move {
            scrape_source(&source, fetcher, reference_date, timeout).await
        })
        .buffered(limit)
        .collect()
        .await;

    let board = MenuBoard {
        reference_date,
        results,
    };
    info!(
        sources = board.results.len(),
        items = board.item_count(),
        failed = board.failed_count(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Aggregated menus"
    );
    board
}

/// [`aggregate_all`] with the reference date taken from `clock`.
pub async fn aggregate_today<F: Fetcher>(
    registry: &SourceRegistry,
    fetcher: &F,
    clock: &dyn Clock,
    options: &AggregateOptions,
) -> MenuBoard {
    aggregate_all(registry, fetcher, clock.today(), options).await
}

async fn scrape_source<F: Fetcher>(
    source: &Source,
    fetcher: &F,
    reference_date: NaiveDate,
    timeout: Duration,
) -> SourceResult {
    let fetched = match tokio::time::timeout(timeout, fetcher.fetch(&source.url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout {
            url: source.url.clone(),
            timeout,
        }),
    };

    match fetched {
        Ok(html) => {
            debug!(
                source = %source.name,
                preview = %truncate_for_log(&html, 120),
                "Fetched source page"
            );
            let items = scrapers::parse(source, &html, reference_date);
            if items.is_empty() {
                warn!(source = %source.name, url = %source.url, "No menu items for the day");
            } else {
                info!(source = %source.name, count = items.len(), "Scraped menu");
            }
            SourceResult::ok(source.name.clone(), items)
        }
        Err(e) => {
            error!(source = %source.name, url = %source.url, error = %e, "Fetch failed");
            SourceResult::failed(source.name.clone(), e)
        }
    }
}
