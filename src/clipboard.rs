//! Clipboard access
//!
//! Tools never talk to the system clipboard directly; they write through the
//! [`ClipboardSink`] trait so the copy contract can be tested without a
//! display server.

use crate::error::Result;

/// Destination for copied text
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is opened lazily on first write and reopened after a failure,
/// since some platforms drop the connection when the window loses focus.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }

        let result = match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_owned()),
            None => return Ok(()),
        };

        if let Err(e) = result {
            self.inner = None;
            return Err(e.into());
        }
        Ok(())
    }
}

/// In-memory clipboard that records every write
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent clipboard contents
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// Number of writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}
