//! Clipboard port - abstracts text access to the OS clipboard
//!
//! Calls are synchronous and blocking. Implementations do not serialize
//! concurrent callers; an embedding application that converts from several
//! threads must serialize clipboard access itself.

use crate::error::ClipboardError;

pub trait ClipboardPort: Send + Sync {
    /// Read the clipboard as text.
    ///
    /// `Ok(None)` means nothing usable was found, which is a normal outcome.
    /// Implementations with a richer acquisition path (format enumeration,
    /// flavor scanning) run it here and return the first non-blank result.
    fn read_text(&self) -> Result<Option<String>, ClipboardError>;

    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[cfg(any(test, feature = "testing"))]
mockall::mock! {
    pub Clipboard {}

    impl ClipboardPort for Clipboard {
        fn read_text(&self) -> Result<Option<String>, ClipboardError>;
        fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
    }
}
