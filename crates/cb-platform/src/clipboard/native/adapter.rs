use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use cb_core::clipboard::{CF_TEXT, CF_UNICODETEXT};
use cb_core::codec::{
    analyze_format_bytes, contains_open_marker, decode_narrow_text, decode_wide_text, strip_nuls,
    FormatReport,
};
use cb_core::{
    AcquisitionConfig, ByteDecoder, ClipboardError, ClipboardPort, FormatEnumerationPort,
    FormatId, FormatProbe, SnippetExtractor,
};
use tracing::{debug, info, trace};

use super::{NativeClipboardApi, NativeSession, SessionState};

const TEXT_FORMATS: [(FormatId, fn(&[u8]) -> String); 2] = [
    (CF_UNICODETEXT, decode_wide_text),
    (CF_TEXT, decode_narrow_text),
];

/// Clipboard port over per-format native access.
///
/// Each acquisition runs in a single [`NativeSession`]: well-known text
/// formats first, then the configured priority format names, then every
/// other format up to the configured cap.
pub struct NativeClipboard<A: NativeClipboardApi> {
    api: A,
    config: AcquisitionConfig,
    decoder: ByteDecoder,
    open: AtomicBool,
}

impl<A: NativeClipboardApi> NativeClipboard<A> {
    pub fn new(api: A, config: AcquisitionConfig) -> Self {
        let decoder = ByteDecoder::new(config.generic_zero_threshold);
        Self {
            api,
            config,
            decoder,
            open: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session_state(&self) -> SessionState {
        if self.open.load(Ordering::SeqCst) {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    fn open_session(&self) -> Option<NativeSession<'_, A>> {
        NativeSession::open(&self.api, &self.config, &self.open)
    }

    /// Best-effort text acquisition. `None` when the clipboard stayed locked
    /// or no format yielded usable text.
    pub fn acquire(&self) -> Option<String> {
        let Some(session) = self.open_session() else {
            info!(
                attempts = self.config.open_retries,
                "Native clipboard stayed busy, giving up"
            );
            return None;
        };

        self.read_text_formats(&session)
            .or_else(|| self.probe_formats(&session))
    }

    fn read_text_formats(&self, session: &NativeSession<'_, A>) -> Option<String> {
        TEXT_FORMATS.iter().find_map(|&(id, decode)| {
            let bytes = session.read_format_bytes(id)?;
            let text = strip_nuls(decode(&bytes));
            let text = text.trim();
            if text.is_empty() {
                trace!(format_id = id, "Text format blank");
                None
            } else {
                debug!(format_id = id, text_len = text.len(), "Read text format");
                Some(text.to_string())
            }
        })
    }

    fn probe_formats(&self, session: &NativeSession<'_, A>) -> Option<String> {
        let probes: Vec<FormatProbe> = session.enumerate_formats().collect();
        if probes.is_empty() {
            debug!("No clipboard formats enumerated");
            return None;
        }

        let mut probed = BTreeSet::new();
        for probe in probes.iter().filter(|p| self.is_priority(p)) {
            debug!(format = %probe, "Probing priority format");
            probed.insert(probe.id);
            if let Some(found) = self.probe_one(session, probe) {
                return Some(found);
            }
        }

        probes
            .iter()
            .filter(|p| !probed.contains(&p.id))
            .take(self.config.max_formats)
            .find_map(|probe| {
                if self.config.verbose {
                    trace!(format = %probe, "Probing format");
                }
                self.probe_one(session, probe)
            })
    }

    fn is_priority(&self, probe: &FormatProbe) -> bool {
        self.config
            .priority_format_names
            .iter()
            .any(|name| probe.name_matches(name))
    }

    /// Decoded text if it carries the marker, else a span cut from the raw bytes.
    fn probe_one(&self, session: &NativeSession<'_, A>, probe: &FormatProbe) -> Option<String> {
        let bytes = session.read_format_bytes(probe.id)?;

        let decoded = self.decoder.decode(&bytes);
        if !decoded.is_blank() && contains_open_marker(decoded.text()) {
            info!(format = %probe, path = %decoded.path(), "Snippet marker found in decoded format");
            return Some(decoded.into_text().trim().to_string());
        }

        let (span, encoding) = SnippetExtractor::from_bytes_with_encoding(&bytes)?;
        info!(format = %probe, encoding = ?encoding, "Snippet extracted from raw format bytes");
        Some(span)
    }

    /// Byte-level report for each format, priority names included even past the cap.
    /// `None` when the clipboard could not be opened.
    pub fn dump_formats(&self) -> Option<Vec<FormatReport>> {
        let session = self.open_session()?;
        let reports = session
            .enumerate_formats()
            .enumerate()
            .filter(|(index, probe)| *index < self.config.max_formats || self.is_priority(probe))
            .map(|(_, probe)| {
                let bytes = session.read_format_bytes(probe.id).unwrap_or_default();
                analyze_format_bytes(probe, &bytes)
            })
            .collect();
        Some(reports)
    }
}

impl<A: NativeClipboardApi> ClipboardPort for NativeClipboard<A> {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        Ok(self.acquire())
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let _session = self.open_session().ok_or_else(|| {
            ClipboardError::Unavailable(format!(
                "clipboard still locked after {} attempts",
                self.config.open_retries
            ))
        })?;

        self.api
            .write_unicode_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        debug!(text_len = text.len(), "Wrote text to native clipboard");
        Ok(())
    }
}
