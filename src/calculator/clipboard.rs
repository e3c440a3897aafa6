//! Clipboard functionality for copying evaluation results.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy an evaluation result to the system clipboard.
pub fn copy_result(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to copy result to clipboard")
}
