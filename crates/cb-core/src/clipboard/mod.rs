//! Clipboard-facing value types: format slots and decoded text.

mod decoded;
mod format;

pub use decoded::{DecodePath, DecodedText};
pub use format::{FormatId, FormatProbe, CF_TEXT, CF_UNICODETEXT};
