use super::{decode_utf16, Endian};
use crate::clipboard::{DecodePath, DecodedText};
use crate::config::ZeroThreshold;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Best-guess text decoder for clipboard byte buffers.
///
/// Order, first match wins:
/// 1. UTF-8 BOM
/// 2. UTF-16 BOM (`FE FF` big-endian, `FF FE` little-endian)
/// 3. Zero-byte parity: zeros on odd indices mean ASCII-range UTF-16LE,
///    zeros on even indices mean UTF-16BE. The dominant side must reach the
///    configured [`ZeroThreshold`].
/// 4. UTF-8 with lossy replacement
///
/// Embedded NULs are stripped from every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteDecoder {
    threshold: ZeroThreshold,
}

impl ByteDecoder {
    pub const fn new(threshold: ZeroThreshold) -> Self {
        Self { threshold }
    }

    /// Decoder for bytes of an enumerated clipboard format.
    pub const fn generic() -> Self {
        Self::new(ZeroThreshold::TenthOfLength)
    }

    /// Decoder for a text-only flavor where no format id is available.
    pub const fn text_only() -> Self {
        Self::new(ZeroThreshold::QuarterOfLength)
    }

    pub fn decode(&self, bytes: &[u8]) -> DecodedText {
        if bytes.is_empty() {
            return DecodedText::empty();
        }

        let (text, path) = if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
            (String::from_utf8_lossy(rest).into_owned(), DecodePath::Utf8Bom)
        } else if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
            (decode_utf16(rest, Endian::Big), DecodePath::Utf16BeBom)
        } else if let Some(rest) = bytes.strip_prefix(&UTF16_LE_BOM) {
            (decode_utf16(rest, Endian::Little), DecodePath::Utf16LeBom)
        } else {
            self.decode_without_bom(bytes)
        };

        DecodedText::new(strip_nuls(text), path)
    }

    fn decode_without_bom(&self, bytes: &[u8]) -> (String, DecodePath) {
        let (even, odd) = count_zero_parity(bytes);
        let threshold = self.threshold.for_len(bytes.len());

        if odd > even && odd >= threshold {
            (decode_utf16(bytes, Endian::Little), DecodePath::Utf16LeHeuristic)
        } else if even > odd && even >= threshold {
            (decode_utf16(bytes, Endian::Big), DecodePath::Utf16BeHeuristic)
        } else {
            (String::from_utf8_lossy(bytes).into_owned(), DecodePath::Fallback)
        }
    }
}

impl Default for ByteDecoder {
    fn default() -> Self {
        Self::generic()
    }
}

/// Decode a NUL-terminated wide (UTF-16LE) text buffer such as `CF_UNICODETEXT`.
pub fn decode_wide_text(bytes: &[u8]) -> String {
    let end = bytes
        .chunks_exact(2)
        .position(|pair| pair == [0, 0])
        .map_or(bytes.len(), |units| units * 2);
    decode_utf16(&bytes[..end], Endian::Little)
}

/// Decode a NUL-terminated narrow text buffer such as `CF_TEXT`.
pub fn decode_narrow_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Remove embedded NUL characters left behind by wide-character mismatches.
pub fn strip_nuls(text: String) -> String {
    if text.contains('\0') {
        text.replace('\0', "")
    } else {
        text
    }
}

fn count_zero_parity(bytes: &[u8]) -> (usize, usize) {
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == 0)
        .fold((0, 0), |(even, odd), (i, _)| {
            if i % 2 == 0 {
                (even + 1, odd)
            } else {
                (even, odd + 1)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_utf16;

    fn with_prefix(prefix: &[u8], body: Vec<u8>) -> Vec<u8> {
        let mut out = prefix.to_vec();
        out.extend(body);
        out
    }

    #[test]
    fn test_empty_input_yields_empty_text() {
        let decoded = ByteDecoder::generic().decode(&[]);
        assert_eq!(decoded.text(), "");
        assert_eq!(decoded.path(), DecodePath::Empty);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        for sample in ["<fmxmlsnippet/>", "Grüße, 世界"] {
            let bytes = with_prefix(&UTF8_BOM, sample.as_bytes().to_vec());
            let decoded = ByteDecoder::generic().decode(&bytes);
            assert_eq!(decoded.text(), sample);
            assert_eq!(decoded.path(), DecodePath::Utf8Bom);
        }
    }

    #[test]
    fn test_utf16_be_bom_is_stripped() {
        for sample in ["hello", "Grüße, 世界"] {
            let bytes = with_prefix(&UTF16_BE_BOM, encode_utf16(sample, Endian::Big));
            let decoded = ByteDecoder::generic().decode(&bytes);
            assert_eq!(decoded.text(), sample);
            assert_eq!(decoded.path(), DecodePath::Utf16BeBom);
        }
    }

    #[test]
    fn test_utf16_le_bom_is_stripped() {
        for sample in ["hello", "Grüße, 世界"] {
            let bytes = with_prefix(&UTF16_LE_BOM, encode_utf16(sample, Endian::Little));
            let decoded = ByteDecoder::generic().decode(&bytes);
            assert_eq!(decoded.text(), sample);
            assert_eq!(decoded.path(), DecodePath::Utf16LeBom);
        }
    }

    #[test]
    fn test_utf16_le_without_bom_uses_parity_heuristic() {
        let text = "<fmxmlsnippet><Step/></fmxmlsnippet>";
        let bytes = encode_utf16(text, Endian::Little);
        assert_eq!(bytes[1], 0, "letter, zero, letter, zero");

        for decoder in [ByteDecoder::generic(), ByteDecoder::text_only()] {
            let decoded = decoder.decode(&bytes);
            assert_eq!(decoded.text(), text);
            assert_eq!(decoded.path(), DecodePath::Utf16LeHeuristic);
        }
    }

    #[test]
    fn test_utf16_be_without_bom_uses_parity_heuristic() {
        let text = "plain ascii payload";
        let decoded = ByteDecoder::generic().decode(&encode_utf16(text, Endian::Big));
        assert_eq!(decoded.text(), text);
        assert_eq!(decoded.path(), DecodePath::Utf16BeHeuristic);
    }

    #[test]
    fn test_sparse_zeros_fall_back_to_utf8_and_are_stripped() {
        let mut bytes = b"abcdefghijklmnopqrstuvwxyz".to_vec();
        bytes.push(0);
        let decoded = ByteDecoder::generic().decode(&bytes);
        assert_eq!(decoded.text(), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(decoded.path(), DecodePath::Fallback);
    }

    #[test]
    fn test_thresholds_differ_per_call_site() {
        // 40 bytes, 5 zeros on odd indices: clears len/10 (4) but not len/4 (10).
        let mut bytes = vec![b'a'; 40];
        for i in [1, 3, 5, 7, 9] {
            bytes[i] = 0;
        }
        assert_eq!(
            ByteDecoder::generic().decode(&bytes).path(),
            DecodePath::Utf16LeHeuristic
        );
        assert_eq!(
            ByteDecoder::text_only().decode(&bytes).path(),
            DecodePath::Fallback
        );
    }

    #[test]
    fn test_wide_and_narrow_text_stop_at_terminator() {
        let mut wide = encode_utf16("Grüße", Endian::Little);
        wide.extend([0, 0, b'x', 0]);
        assert_eq!(decode_wide_text(&wide), "Grüße");
        assert_eq!(decode_narrow_text(b"abc\0garbage"), "abc");
        assert_eq!(decode_narrow_text(b"no terminator"), "no terminator");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let decoded = ByteDecoder::generic().decode(&[b'o', b'k', 0xC3]);
        assert_eq!(decoded.text(), "ok\u{FFFD}");
    }
}
