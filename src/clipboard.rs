//! System clipboard access via copypasta.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Copy `text` to the system clipboard.
///
/// A fresh context is created per call; callers branch on the result to
/// confirm or report, never abort.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut ctx =
        ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
    Ok(())
}
