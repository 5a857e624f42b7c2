//! # cb-core
//!
//! Core domain models and pure logic for cuttingboard.
//!
//! This crate contains no operating-system access. It turns raw clipboard
//! bytes into text, locates the `<fmxmlsnippet>` payload inside arbitrary
//! data, validates that payload into a typed [`SnippetModel`], and defines
//! the ports the platform layer implements.

// Public module exports
pub mod clipboard;
pub mod codec;
pub mod config;
pub mod error;
pub mod ports;
pub mod snippet;

// Re-export commonly used types at the crate root
pub use clipboard::{DecodePath, DecodedText, FormatId, FormatProbe};
pub use codec::{ByteDecoder, SnippetExtractor};
pub use config::{AcquisitionConfig, ZeroThreshold};
pub use error::{ClipboardError, ConversionError, UnsupportedReason};
pub use ports::{ClipboardPort, FormatEnumerationPort};
pub use snippet::{ElementType, ElementTypes, SnippetModel, XmlValidatingParser};
