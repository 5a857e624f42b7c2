use serde::Serialize;
use std::fmt;

/// Numeric clipboard format identifier as reported by the OS.
pub type FormatId = u32;

/// Legacy single-byte text format.
pub const CF_TEXT: FormatId = 1;
/// Wide-character (UTF-16LE) text format.
pub const CF_UNICODETEXT: FormatId = 13;

/// One slot in the OS clipboard's list of available representations.
///
/// Produced during enumeration and dropped with it; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatProbe {
    pub id: FormatId,
    pub name: Option<String>,
    pub byte_size: Option<u64>,
}

impl FormatProbe {
    pub fn new(id: FormatId) -> Self {
        Self {
            id,
            name: None,
            byte_size: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name.filter(|n| !n.is_empty());
        self
    }

    pub fn with_size(mut self, byte_size: Option<u64>) -> Self {
        self.byte_size = byte_size;
        self
    }

    /// Case-insensitive comparison against a registered format name.
    pub fn name_matches(&self, target: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(target))
    }
}

impl fmt::Display for FormatProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id={}", self.id)?;
        if let Some(name) = &self.name {
            write!(f, ", name='{}'", name)?;
        }
        if let Some(size) = self.byte_size {
            write!(f, ", size={}", size)?;
        }
        Ok(())
    }
}
