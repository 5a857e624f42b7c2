//! Native clipboard acquisition over per-format OS access.

mod adapter;
mod session;
#[cfg(target_os = "windows")]
mod windows;

pub use adapter::NativeClipboard;
pub use session::{NativeSession, SessionState};
#[cfg(target_os = "windows")]
pub use windows::Win32ClipboardApi;

use anyhow::Result;
use cb_core::FormatId;

/// Thin wrapper over the OS clipboard calls the native adapter needs.
///
/// Every method except `open`, `close` and `write_unicode_text` is only
/// called while the clipboard is open. Reads are best-effort and return
/// `None` on any OS failure.
pub trait NativeClipboardApi: Send + Sync {
    fn open(&self) -> Result<()>;

    fn close(&self) -> Result<()>;

    /// Format ids in the order the OS enumerates them.
    fn formats(&self) -> Vec<FormatId>;

    fn has_format(&self, id: FormatId) -> bool;

    /// Registered name, `None` for predefined or unnamed formats.
    fn format_name(&self, id: FormatId) -> Option<String>;

    /// Size of the data handle in bytes, `None` when the OS cannot tell.
    fn format_size(&self, id: FormatId) -> Option<u64>;

    fn read_format(&self, id: FormatId) -> Option<Vec<u8>>;

    /// Read at most `len` bytes of a format whose size is unknown.
    fn read_window(&self, id: FormatId, len: usize) -> Option<Vec<u8>> {
        self.read_format(id).map(|mut bytes| {
            bytes.truncate(len);
            bytes
        })
    }

    /// Empty the clipboard and place `text` as wide-character text.
    /// Called while the clipboard is open.
    fn write_unicode_text(&self, text: &str) -> Result<()>;
}
