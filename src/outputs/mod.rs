//! Renderers for the aggregated [`MenuBoard`](crate::models::MenuBoard).
//!
//! - [`html`]: the single page shown to people
//! - [`json`]: the same data for machines, also written to files by the CLI

pub mod html;
pub mod json;
