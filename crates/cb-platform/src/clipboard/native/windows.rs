use anyhow::{anyhow, Result};
use cb_core::FormatId;
use clipboard_win::raw;

use super::NativeClipboardApi;

/// Win32 clipboard calls through `clipboard-win`'s raw layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32ClipboardApi;

impl NativeClipboardApi for Win32ClipboardApi {
    fn open(&self) -> Result<()> {
        raw::open().map_err(|e| anyhow!("OpenClipboard failed: {}", e))
    }

    fn close(&self) -> Result<()> {
        raw::close().map_err(|e| anyhow!("CloseClipboard failed: {}", e))
    }

    fn formats(&self) -> Vec<FormatId> {
        raw::EnumFormats::new().collect()
    }

    fn has_format(&self, id: FormatId) -> bool {
        raw::is_format_avail(id)
    }

    fn format_name(&self, id: FormatId) -> Option<String> {
        raw::format_name_big(id)
    }

    fn format_size(&self, id: FormatId) -> Option<u64> {
        raw::size(id).map(|size| size.get() as u64)
    }

    fn read_format(&self, id: FormatId) -> Option<Vec<u8>> {
        let mut out = Vec::new();
        raw::get_vec(id, &mut out).ok()?;
        Some(out)
    }

    fn read_window(&self, id: FormatId, len: usize) -> Option<Vec<u8>> {
        let mut buf = vec![0u8; len];
        let read = raw::get(id, &mut buf).ok()?;
        buf.truncate(read);
        Some(buf)
    }

    fn write_unicode_text(&self, text: &str) -> Result<()> {
        raw::empty().map_err(|e| anyhow!("Failed to clear clipboard: {}", e))?;
        raw::set_string(text).map_err(|e| anyhow!("Failed to set clipboard text: {}", e))
    }
}
