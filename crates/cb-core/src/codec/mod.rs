//! Byte-level text recovery.
//!
//! Clipboard formats arrive as opaque bytes in whatever encoding the source
//! application chose. Everything in here is pure and infallible: a heuristic
//! that cannot make sense of its input returns `None` (or an empty string),
//! never an error.

mod decoder;
mod extractor;
mod report;

pub use decoder::{decode_narrow_text, decode_wide_text, strip_nuls, ByteDecoder};
pub use extractor::{
    contains_open_marker, extract_from_bytes, extract_from_bytes_with_encoding,
    extract_from_text, MarkerEncoding, CLOSE_MARKER, MAX_SCAN_LEN, OPEN_MARKER,
};
pub(crate) use extractor::starts_with_open_marker;
pub use report::{analyze_format_bytes, FormatReport};

/// Marker-span extraction, used by the adapters and the inbound converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnippetExtractor;

impl SnippetExtractor {
    /// See [`extract_from_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Option<String> {
        extract_from_bytes(bytes)
    }

    /// Like [`from_bytes`](Self::from_bytes), also naming the encoding that matched.
    pub fn from_bytes_with_encoding(bytes: &[u8]) -> Option<(String, MarkerEncoding)> {
        extract_from_bytes_with_encoding(bytes)
    }

    /// See [`extract_from_text`].
    pub fn from_text(text: &str) -> Option<String> {
        extract_from_text(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Big,
    Little,
}

pub(crate) fn decode_utf16(bytes: &[u8], endian: Endian) -> String {
    // A dangling odd byte cannot form a code unit and is dropped.
    let units = bytes.chunks_exact(2).map(|pair| match endian {
        Endian::Big => u16::from_be_bytes([pair[0], pair[1]]),
        Endian::Little => u16::from_le_bytes([pair[0], pair[1]]),
    });
    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

pub(crate) fn encode_utf16(text: &str, endian: Endian) -> Vec<u8> {
    text.encode_utf16()
        .flat_map(|unit| match endian {
            Endian::Big => unit.to_be_bytes(),
            Endian::Little => unit.to_le_bytes(),
        })
        .collect()
}
