//! Clipboard writing with a buffered fallback.
//!
//! [`SystemClipboard`] talks to the OS clipboard; hosts without one (tests,
//! CI, remote shells) use [`BufferedClipboard`], which records writes
//! in-process instead of failing outright.

use std::cell::RefCell;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Writes text for the user to paste elsewhere.
pub trait ClipboardWriter {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// OS clipboard via `arboard`.
#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
pub struct SystemClipboard {
    inner: RefCell<arboard::Clipboard>,
}

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        Ok(Self {
            inner: RefCell::new(inner),
        })
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .borrow_mut()
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// In-process fallback that records writes instead of reaching the OS.
#[derive(Default)]
pub struct BufferedClipboard {
    entries: RefCell<Vec<String>>,
}

impl BufferedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent write, if any.
    pub fn last(&self) -> Option<String> {
        self.entries.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ClipboardWriter for BufferedClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.entries.borrow_mut().push(text.to_string());
        Ok(())
    }
}
