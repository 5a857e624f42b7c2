use crate::clipboard::{FormatId, FormatProbe};

/// Optional capability: per-format access to the OS clipboard.
///
/// Only meaningful while a clipboard session is open, so implementations are
/// handed out by the session itself and borrow it. Both operations are
/// best-effort: a slot that cannot be described or read is skipped or yields
/// `None`, never an error.
pub trait FormatEnumerationPort {
    /// Formats currently on the clipboard, in the order the OS reports them.
    fn enumerate_formats(&self) -> Box<dyn Iterator<Item = FormatProbe> + '_>;

    /// Raw bytes of one format, or `None` if absent, oversized, or unreadable.
    fn read_format_bytes(&self, id: FormatId) -> Option<Vec<u8>>;
}
