//! cuttingboard
//!
//! FileMaker 剪贴板片段桥接库
//!
//! Recovers `<fmxmlsnippet>` documents from whatever representation the OS
//! clipboard holds, validates them, and writes validated snippets back.

pub mod bootstrap;

// 重新导出常用类型
pub use cb_app::{
    InboundConverter, OutboundConverter, PushSnippetError, PushSnippetToClipboard,
    ReadSnippetError, ReadSnippetFromClipboard,
};
pub use cb_core::{
    AcquisitionConfig, ByteDecoder, ClipboardError, ClipboardPort, ConversionError, ElementType,
    ElementTypes, SnippetExtractor, SnippetModel, UnsupportedReason, XmlValidatingParser,
};
pub use cb_platform::{detect_clipboard_capability, ClipboardCapability, PlatformClipboard};
