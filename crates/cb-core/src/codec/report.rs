use super::{decode_utf16, Endian, OPEN_MARKER};
use crate::clipboard::FormatProbe;
use serde::Serialize;
use std::fmt;

const HEX_PREVIEW_BYTES: usize = 64;
const SNIPPET_PREVIEW_CHARS: usize = 120;
const GUESS_WINDOW: usize = 256;

/// Byte-level diagnostics for one clipboard format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatReport {
    pub probe: FormatProbe,
    pub len: usize,
    pub bom: &'static str,
    pub encoding_guess: &'static str,
    pub cr: usize,
    pub lf: usize,
    pub crlf: usize,
    pub ends_with_nul: bool,
    pub hex_preview: String,
    /// First characters from the open marker on, newlines escaped.
    pub snippet_preview: Option<String>,
}

/// Inspect `bytes` without interpreting them as a snippet.
pub fn analyze_format_bytes(probe: FormatProbe, bytes: &[u8]) -> FormatReport {
    let bom = detect_bom(bytes);
    let encoding_guess = guess_encoding(bom, bytes);
    let (cr, lf, crlf) = count_line_endings(bytes);

    FormatReport {
        probe,
        len: bytes.len(),
        bom,
        encoding_guess,
        cr,
        lf,
        crlf,
        ends_with_nul: bytes.last() == Some(&0),
        hex_preview: hex_preview(bytes),
        snippet_preview: snippet_preview(encoding_guess, bytes),
    }
}

impl fmt::Display for FormatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Format {}", self.probe)?;
        writeln!(f, "  length       : {}", self.len)?;
        writeln!(f, "  bom          : {}", self.bom)?;
        writeln!(f, "  encoding     : {}", self.encoding_guess)?;
        writeln!(f, "  CR/LF/CRLF   : {}/{}/{}", self.cr, self.lf, self.crlf)?;
        writeln!(f, "  ends with NUL: {}", self.ends_with_nul)?;
        writeln!(f, "  hex[0..{}]   : {}", HEX_PREVIEW_BYTES, self.hex_preview)?;
        match &self.snippet_preview {
            Some(preview) => write!(f, "  snippet      : {preview}"),
            None => write!(f, "  snippet      : <none>"),
        }
    }
}

fn detect_bom(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        "UTF-8"
    } else if bytes.starts_with(&[0xFF, 0xFE]) {
        "UTF-16LE"
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        "UTF-16BE"
    } else {
        "none"
    }
}

fn guess_encoding(bom: &'static str, bytes: &[u8]) -> &'static str {
    if bom != "none" {
        return bom;
    }

    let window = &bytes[..bytes.len().min(GUESS_WINDOW)];
    let odd_zeros = window.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();
    let even_zeros = window.iter().step_by(2).filter(|&&b| b == 0).count();

    if odd_zeros > window.len() / 4 {
        "UTF-16LE?"
    } else if even_zeros > window.len() / 4 {
        "UTF-16BE?"
    } else if std::str::from_utf8(bytes).is_ok() {
        "UTF-8?"
    } else {
        "unknown"
    }
}

fn count_line_endings(bytes: &[u8]) -> (usize, usize, usize) {
    let cr = bytes.iter().filter(|&&b| b == b'\r').count();
    let lf = bytes.iter().filter(|&&b| b == b'\n').count();
    let crlf = bytes.windows(2).filter(|w| *w == b"\r\n").count();
    (cr, lf, crlf)
}

fn hex_preview(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(HEX_PREVIEW_BYTES)
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn snippet_preview(encoding_guess: &str, bytes: &[u8]) -> Option<String> {
    let text = if encoding_guess.starts_with("UTF-16LE") {
        decode_utf16(bytes, Endian::Little)
    } else if encoding_guess.starts_with("UTF-16BE") {
        decode_utf16(bytes, Endian::Big)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    };

    let start = text.to_ascii_lowercase().find(OPEN_MARKER)?;
    let preview: String = text[start..]
        .chars()
        .take(SNIPPET_PREVIEW_CHARS)
        .collect::<String>()
        .replace("\r\n", "\\n")
        .replace(['\r', '\n'], "\\n");
    Some(preview)
}
