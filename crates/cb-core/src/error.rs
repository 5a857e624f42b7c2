//! Typed faults surfaced by the core.
//!
//! Decoding and extraction heuristics never produce these; they return
//! `Option` so callers can move on to the next candidate format. Only the
//! parser, the converters, and the clipboard port raise typed faults.

use crate::snippet::ElementTypes;
use std::fmt;
use thiserror::Error;

/// Faults at the [`ClipboardPort`](crate::ports::ClipboardPort) boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Locked or inaccessible after bounded retries. The caller may retry later.
    #[error("clipboard is currently unavailable: {0}")]
    Unavailable(String),

    /// Data is present but cannot be interpreted as text.
    #[error("clipboard content is not readable as text: {0}")]
    Unreadable(String),
}

/// Why a structurally valid snippet was refused for the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    LayoutOnly,
    NoSupportedCategory,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::LayoutOnly => f.write_str("layout snippets are not supported"),
            UnsupportedReason::NoSupportedCategory => {
                f.write_str("snippet contains neither fields nor script steps")
            }
        }
    }
}

/// Faults raised while turning text into a validated snippet and back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("clipboard does not contain a recognizable fmxmlsnippet")]
    NoRecognizableContent,

    #[error("malformed fmxmlsnippet document: {0}")]
    MalformedDocument(String),

    #[error("fmxmlsnippet has no child elements")]
    EmptyDocument,

    #[error("unsupported snippet type [{found}]: {reason}")]
    UnsupportedSnippetType {
        found: ElementTypes,
        reason: UnsupportedReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::ElementType;

    #[test]
    fn test_unsupported_message_names_offending_category() {
        let err = ConversionError::UnsupportedSnippetType {
            found: ElementTypes::from_iter([ElementType::Layouts]),
            reason: UnsupportedReason::LayoutOnly,
        };
        let message = err.to_string();
        assert!(message.contains("Layouts"), "message was: {message}");
        assert!(message.contains("layout snippets are not supported"));
    }
}
