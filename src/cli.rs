//! Command-line interface definitions.
//!
//! All options can be given as flags; the ones that matter for deployment
//! also read environment variables.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;

use crate::aggregator::AggregateOptions;
use crate::config::SourceRegistry;
use crate::error::Result;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Print today's page to stdout
/// lunch_menus
///
/// # Write HTML and JSON for a given day
/// lunch_menus --date 2025-03-05 --html-output menu.html -j menu.json
///
/// # Serve the page on port 3000
/// lunch_menus --serve
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// YAML file with the source registry (defaults to the built-in restaurants)
    #[arg(short, long, env = "MENU_SOURCES")]
    pub sources: Option<PathBuf>,

    /// Reference date as YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Per-source fetch timeout in seconds
    #[arg(long, env = "MENU_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    /// How many sources to scrape at once (defaults to all of them)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Serve the page over HTTP instead of rendering it once
    #[arg(long)]
    pub serve: bool,

    /// Address to bind when serving
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind when serving
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Write the HTML page here instead of stdout
    #[arg(long)]
    pub html_output: Option<PathBuf>,

    /// Also write the board as JSON
    #[arg(short, long)]
    pub json_output: Option<PathBuf>,
}

impl Cli {
    /// Load and validate the source registry.
    pub fn registry(&self) -> Result<SourceRegistry> {
        match &self.sources {
            Some(path) => SourceRegistry::from_file(path),
            None => Ok(SourceRegistry::builtin()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            timeout: self.timeout(),
            concurrency: self.concurrency,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
