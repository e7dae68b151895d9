//! JSON rendering of the aggregated menus.
//!
//! The document mirrors [`MenuBoard`]:
//!
//! ```json
//! {
//!   "reference_date": "2025-03-05",
//!   "results": [
//!     { "source_name": "Bistro 22", "items": [{ "dish_name": "…", "price": "45" }] },
//!     { "source_name": "Kanas", "items": [], "error": "HTTP 503 for …" }
//!   ]
//! }
//! ```

use std::error::Error;
use std::path::Path;

use tokio::fs;
use tracing::{error, info, instrument};

use crate::models::MenuBoard;

pub fn render_board(board: &MenuBoard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(board)
}

/// Write the board as JSON to `path`, creating parent directories.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn write_board(board: &MenuBoard, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let json = render_board(board)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!("Wrote JSON menu board");
    Ok(())
}
