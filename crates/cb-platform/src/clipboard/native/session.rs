use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use cb_core::{AcquisitionConfig, FormatEnumerationPort, FormatId, FormatProbe};
use tracing::{debug, trace, warn};

use super::NativeClipboardApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
}

/// One open/read/close cycle on the native clipboard.
///
/// Holding a `NativeSession` means the clipboard is open. Dropping it closes
/// the clipboard on every exit path; a failing close is logged, never raised.
pub struct NativeSession<'a, A: NativeClipboardApi + ?Sized> {
    api: &'a A,
    config: &'a AcquisitionConfig,
    open_flag: &'a AtomicBool,
}

impl<'a, A: NativeClipboardApi + ?Sized> NativeSession<'a, A> {
    /// Try to open the clipboard, retrying with a fixed delay.
    ///
    /// Returns `None` when every attempt fails; the clipboard is then left
    /// closed and nothing needs releasing.
    pub fn open(api: &'a A, config: &'a AcquisitionConfig, open_flag: &'a AtomicBool) -> Option<Self> {
        let attempts = config.open_retries.max(1);
        let delay = Duration::from_millis(config.open_retry_delay_ms);

        for attempt in 1..=attempts {
            match api.open() {
                Ok(()) => {
                    open_flag.store(true, Ordering::SeqCst);
                    trace!(attempt, "Opened native clipboard");
                    return Some(Self {
                        api,
                        config,
                        open_flag,
                    });
                }
                Err(err) => {
                    debug!(attempt, attempts, error = %err, "Native clipboard busy");
                    if attempt < attempts {
                        thread::sleep(delay);
                    }
                }
            }
        }

        None
    }
}

impl<A: NativeClipboardApi + ?Sized> FormatEnumerationPort for NativeSession<'_, A> {
    fn enumerate_formats(&self) -> Box<dyn Iterator<Item = FormatProbe> + '_> {
        Box::new(self.api.formats().into_iter().map(move |id| {
            FormatProbe::new(id)
                .with_name(self.api.format_name(id))
                .with_size(self.api.format_size(id))
        }))
    }

    fn read_format_bytes(&self, id: FormatId) -> Option<Vec<u8>> {
        if !self.api.has_format(id) {
            return None;
        }

        let bytes = match self.api.format_size(id) {
            Some(size) if size > self.config.max_format_bytes => {
                debug!(format_id = id, size, "Skipping oversized clipboard format");
                return None;
            }
            Some(size) if size > 0 => self.api.read_format(id),
            _ => self
                .config
                .unsized_probe_windows
                .iter()
                .find_map(|&window| {
                    trace!(format_id = id, window, "Reading unsized format window");
                    self.api.read_window(id, window)
                }),
        };

        bytes.filter(|b| !b.is_empty())
    }
}

impl<A: NativeClipboardApi + ?Sized> Drop for NativeSession<'_, A> {
    fn drop(&mut self) {
        if let Err(err) = self.api.close() {
            warn!(error = %err, "Failed to close native clipboard");
        }
        self.open_flag.store(false, Ordering::SeqCst);
        trace!("Closed native clipboard");
    }
}
