//! Clipboard export.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard error: {0}")]
    Write(String),
    #[error("No password to copy")]
    NothingToCopy,
}

/// Destination for copied passwords.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The host system clipboard.
pub struct SystemClipboard(ClipboardContext);

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        ClipboardContext::new()
            .map(SystemClipboard)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Reading back keeps some providers from holding a second copy; wipe ours.
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("copied {} chars to clipboard", text.len());
        Ok(())
    }
}

/// Opens the system clipboard on first use and keeps it for later copies.
#[derive(Default)]
pub struct LazyClipboard(Option<SystemClipboard>);

impl Clipboard for LazyClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.0.is_none() {
            self.0 = Some(SystemClipboard::new()?);
        }
        match self.0.as_mut() {
            Some(clipboard) => clipboard.copy(text),
            None => Err(ClipboardError::Unavailable("not initialized".into())),
        }
    }
}
