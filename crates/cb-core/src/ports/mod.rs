//! Ports (trait boundaries) implemented by the platform layer.

mod clipboard;
mod format_enumeration;

pub use clipboard::ClipboardPort;
pub use format_enumeration::FormatEnumerationPort;

#[cfg(any(test, feature = "testing"))]
pub use clipboard::MockClipboard;
