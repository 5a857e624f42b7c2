//! Generic multi-flavor clipboard acquisition.

mod rs_source;

pub use rs_source::ClipboardRsSource;

use anyhow::Result;
use cb_core::codec::{
    analyze_format_bytes, contains_open_marker, strip_nuls, FormatReport,
};
use cb_core::{
    AcquisitionConfig, ByteDecoder, ClipboardError, ClipboardPort, FormatProbe, SnippetExtractor,
};
use tracing::{debug, info, trace, warn};

/// Text flavors with a dedicated accessor in the clipboard backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFlavor {
    Plain,
    Html,
    Rtf,
}

/// Named byte flavors worth decoding before the exhaustive scan.
pub const KNOWN_TEXT_FLAVORS: &[&str] = &[
    "public.utf16-plain-text",
    "public.utf16-external-plain-text",
    "public.utf8-plain-text",
    "public.xml",
    "text/xml",
    "application/xml",
    "text/plain;charset=utf-16",
    "text/plain;charset=unicode",
];

/// Flavor name the XML copy of a written payload is published under.
#[cfg(target_os = "macos")]
pub const XML_FLAVOR: &str = "public.xml";
#[cfg(not(target_os = "macos"))]
pub const XML_FLAVOR: &str = "application/xml";

/// Flavor-level clipboard access. Every call may fail independently.
pub trait FlavorSource: Send + Sync {
    fn read_text(&self, flavor: TextFlavor) -> Result<Option<String>>;

    /// Every flavor name the clipboard currently advertises.
    fn available_flavors(&self) -> Result<Vec<String>>;

    fn read_bytes(&self, flavor: &str) -> Result<Option<Vec<u8>>>;

    fn write_text(&self, text: &str) -> Result<()>;

    /// Publish `text` as plain text and as `flavor` in one clipboard update.
    fn write_text_with_flavor(&self, text: &str, flavor: &str) -> Result<()>;
}

/// Clipboard port over a [`FlavorSource`].
///
/// Acquisition order, first non-blank result wins:
/// 1. plain text
/// 2. HTML and RTF text, then [`KNOWN_TEXT_FLAVORS`] decoded as bytes
/// 3. every advertised flavor, keeping decoded text only if it carries the
///    snippet marker and otherwise cutting the span from the raw bytes
pub struct FlavorClipboard<S: FlavorSource> {
    source: S,
    config: AcquisitionConfig,
    decoder: ByteDecoder,
}

impl<S: FlavorSource> FlavorClipboard<S> {
    pub fn new(source: S, config: AcquisitionConfig) -> Self {
        let decoder = ByteDecoder::new(config.text_only_zero_threshold);
        Self {
            source,
            config,
            decoder,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Best-effort text acquisition; a flavor that fails is skipped.
    ///
    /// When nothing usable turns up and the plain-text flavor was present but
    /// could not be read, that failure is reported as
    /// [`ClipboardError::Unreadable`] instead of an empty clipboard.
    pub fn acquire(&self) -> Result<Option<String>, ClipboardError> {
        let (plain, plain_failure) = match self.source.read_text(TextFlavor::Plain) {
            Ok(text) => (text.and_then(|t| non_blank(strip_nuls(t))), None),
            Err(err) => {
                debug!(flavor = ?TextFlavor::Plain, error = %err, "Text flavor read failed");
                (None, Some(err))
            }
        };

        let text = plain
            .or_else(|| self.read_known_flavors())
            .or_else(|| self.scan_all_flavors());
        match (text, plain_failure) {
            (Some(text), _) => Ok(Some(text)),
            (None, Some(err)) => Err(ClipboardError::Unreadable(err.to_string())),
            (None, None) => Ok(None),
        }
    }

    fn read_flavor_text(&self, flavor: TextFlavor) -> Option<String> {
        match self.source.read_text(flavor) {
            Ok(Some(text)) => non_blank(strip_nuls(text)),
            Ok(None) => None,
            Err(err) => {
                debug!(flavor = ?flavor, error = %err, "Text flavor read failed");
                None
            }
        }
    }

    fn read_flavor_bytes(&self, flavor: &str) -> Option<Vec<u8>> {
        match self.source.read_bytes(flavor) {
            Ok(bytes) => bytes.filter(|b| !b.is_empty()),
            Err(err) => {
                debug!(flavor, error = %err, "Flavor read failed");
                None
            }
        }
    }

    fn read_known_flavors(&self) -> Option<String> {
        if let Some(text) = [TextFlavor::Html, TextFlavor::Rtf]
            .into_iter()
            .find_map(|flavor| self.read_flavor_text(flavor))
        {
            return Some(text);
        }

        let available = self.available_flavors();
        KNOWN_TEXT_FLAVORS
            .iter()
            .filter_map(|known| available.iter().find(|a| a.eq_ignore_ascii_case(known)))
            .find_map(|flavor| {
                let bytes = self.read_flavor_bytes(flavor)?;
                let text = non_blank(self.decoder.decode(&bytes).into_text());
                if text.is_some() {
                    debug!(flavor = %flavor, "Read known text flavor");
                }
                text
            })
    }

    fn scan_all_flavors(&self) -> Option<String> {
        self.available_flavors()
            .iter()
            .take(self.config.max_formats)
            .find_map(|flavor| {
                if self.config.verbose {
                    trace!(flavor = %flavor, "Probing flavor");
                }
                let bytes = self.read_flavor_bytes(flavor)?;

                let decoded = self.decoder.decode(&bytes);
                if contains_open_marker(decoded.text()) {
                    info!(flavor = %flavor, path = %decoded.path(), "Snippet marker found in decoded flavor");
                    return non_blank(decoded.into_text());
                }

                let span = SnippetExtractor::from_bytes(&bytes)?;
                info!(flavor = %flavor, "Snippet extracted from raw flavor bytes");
                Some(span)
            })
    }

    fn available_flavors(&self) -> Vec<String> {
        self.source.available_flavors().unwrap_or_else(|err| {
            debug!(error = %err, "Listing clipboard flavors failed");
            Vec::new()
        })
    }

    /// Byte-level report for each advertised flavor. Flavors have no numeric
    /// id here, so the probe id is the flavor's position in the list.
    pub fn dump_flavors(&self) -> Vec<FormatReport> {
        self.available_flavors()
            .into_iter()
            .take(self.config.max_formats)
            .enumerate()
            .map(|(index, flavor)| {
                let bytes = self.read_flavor_bytes(&flavor).unwrap_or_default();
                let probe = FormatProbe::new(index as u32)
                    .with_name(Some(flavor))
                    .with_size(Some(bytes.len() as u64));
                analyze_format_bytes(probe, &bytes)
            })
            .collect()
    }
}

impl<S: FlavorSource> ClipboardPort for FlavorClipboard<S> {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        self.acquire()
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self.source.write_text_with_flavor(text, XML_FLAVOR) {
            Ok(()) => {
                debug!(flavor = XML_FLAVOR, text_len = text.len(), "Wrote text and XML flavor");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Multi-flavor write failed, falling back to plain text");
                self.source
                    .write_text(text)
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))
            }
        }
    }
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
