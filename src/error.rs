//! Error types for fetching, dispatching, and registry configuration.
//!
//! Only two kinds of failure are hard errors in the extraction layer:
//!
//! - [`FetchError`]: one source's page could not be retrieved. The aggregator
//!   recovers from it per source, so it never aborts a run.
//! - [`MenuError::UnknownSourceType`]: a registry entry names a parser family
//!   that does not exist. Raised while loading the registry, before any run.
//!
//! A parser that finds none of the markup it expects returns an empty menu
//! instead of an error.

use std::time::Duration;

use thiserror::Error;

/// Failure retrieving the raw markup of a single source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS, or other transport failure.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status code.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The request did not complete within the configured timeout.
    #[error("timed out after {timeout:?} fetching {url}")]
    Timeout { url: String, timeout: Duration },

    /// The response body could not be read as text.
    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

/// Configuration and dispatch errors.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("unknown source type: {0:?}")]
    UnknownSourceType(String),

    #[error("invalid source registry: {message}")]
    InvalidRegistry { message: String },

    #[error("invalid source url {url:?}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("failed to parse source registry: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
