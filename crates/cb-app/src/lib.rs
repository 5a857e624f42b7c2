//! cuttingboard application layer
//!
//! Converters between clipboard text and validated snippets, and the use
//! cases that drive them against a [`ClipboardPort`](cb_core::ClipboardPort).

pub mod usecases;

pub use usecases::snippet::{InboundConverter, OutboundConverter};
pub use usecases::{
    PushSnippetError, PushSnippetToClipboard, ReadSnippetError, ReadSnippetFromClipboard,
};
