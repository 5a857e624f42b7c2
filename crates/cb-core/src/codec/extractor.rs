use super::{decode_utf16, encode_utf16, strip_nuls, Endian};
use once_cell::sync::Lazy;
use regex::Regex;

pub const OPEN_MARKER: &str = "<fmxmlsnippet";
pub const CLOSE_MARKER: &str = "</fmxmlsnippet>";

/// Texts longer than this skip the regex fallback in [`extract_from_text`].
pub const MAX_SCAN_LEN: usize = 2_000_000;

static SNIPPET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<fmxmlsnippet\b.*?</fmxmlsnippet>").expect("snippet pattern is valid")
});

/// Byte encodings searched for the marker pair, in search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEncoding {
    Ascii,
    Utf16Le,
    Utf16Be,
}

impl MarkerEncoding {
    pub const SEARCH_ORDER: [MarkerEncoding; 3] = [
        MarkerEncoding::Ascii,
        MarkerEncoding::Utf16Le,
        MarkerEncoding::Utf16Be,
    ];

    fn encode(self, marker: &str) -> Vec<u8> {
        match self {
            MarkerEncoding::Ascii => marker.as_bytes().to_vec(),
            MarkerEncoding::Utf16Le => encode_utf16(marker, Endian::Little),
            MarkerEncoding::Utf16Be => encode_utf16(marker, Endian::Big),
        }
    }

    fn decode(self, span: &[u8]) -> String {
        match self {
            MarkerEncoding::Ascii => String::from_utf8_lossy(span).into_owned(),
            MarkerEncoding::Utf16Le => decode_utf16(span, Endian::Little),
            MarkerEncoding::Utf16Be => decode_utf16(span, Endian::Big),
        }
    }
}

/// Locate the snippet span in raw bytes.
///
/// For each encoding in [`MarkerEncoding::SEARCH_ORDER`] the span runs from
/// the first open marker to the end of the last close marker. The byte search
/// is case-sensitive. Returns the trimmed, NUL-free span, or `None` if no
/// encoding yields a well-ordered pair.
pub fn extract_from_bytes(bytes: &[u8]) -> Option<String> {
    extract_from_bytes_with_encoding(bytes).map(|(span, _)| span)
}

/// Same as [`extract_from_bytes`], also reporting which encoding matched.
pub fn extract_from_bytes_with_encoding(bytes: &[u8]) -> Option<(String, MarkerEncoding)> {
    if bytes.is_empty() {
        return None;
    }

    MarkerEncoding::SEARCH_ORDER.iter().find_map(|&encoding| {
        let open = encoding.encode(OPEN_MARKER);
        let close = encoding.encode(CLOSE_MARKER);

        let start = find(bytes, &open)?;
        let close_at = rfind(bytes, &close)?;
        if close_at < start {
            return None;
        }

        let span = &bytes[start..close_at + close.len()];
        let text = strip_nuls(encoding.decode(span));
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some((trimmed.to_string(), encoding))
        }
    })
}

/// Locate the snippet span in already-decoded text, ignoring ASCII case.
///
/// A linear index search runs first: the open marker (followed by a tag
/// boundary), the `>` ending that tag, then the first close marker after it.
/// When that finds nothing and the text is at most [`MAX_SCAN_LEN`] bytes, a
/// non-greedy regex gets one more try.
pub fn extract_from_text(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    if let Some(span) = find_span_ignore_case(text) {
        return non_blank(span);
    }

    if text.len() > MAX_SCAN_LEN {
        return None;
    }

    SNIPPET_PATTERN
        .find(text)
        .and_then(|found| non_blank(found.as_str()))
}

/// Cheap pre-check: does `text` contain the open marker in any ASCII case?
pub fn contains_open_marker(text: &str) -> bool {
    find_ignore_case(text.as_bytes(), OPEN_MARKER.as_bytes(), 0).is_some()
}

fn non_blank(span: &str) -> Option<String> {
    let trimmed = span.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn find_span_ignore_case(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut from = 0;

    while let Some(open) = find_ignore_case(bytes, OPEN_MARKER.as_bytes(), from) {
        let after = open + OPEN_MARKER.len();
        if is_tag_boundary(bytes.get(after).copied()) {
            let tag_end = after + bytes[after..].iter().position(|&b| b == b'>')?;
            let close = find_ignore_case(bytes, CLOSE_MARKER.as_bytes(), tag_end + 1)?;
            // All indices sit on ASCII bytes, hence on char boundaries.
            return Some(&text[open..close + CLOSE_MARKER.len()]);
        }
        from = after;
    }

    None
}

/// `text` opens with the marker itself, no namespace prefix, in any ASCII case.
pub(crate) fn starts_with_open_marker(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes
        .get(..OPEN_MARKER.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(OPEN_MARKER.as_bytes()))
        && is_tag_boundary(bytes.get(OPEN_MARKER.len()).copied())
}

/// `<fmxmlsnippetX` is some other tag; the marker must end at a non-word byte.
fn is_tag_boundary(next: Option<u8>) -> bool {
    match next {
        Some(b) => !(b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80),
        None => false,
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

fn find_ignore_case(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
        .map(|i| i + from)
}
