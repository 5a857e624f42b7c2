//! cuttingboard platform layer
//!
//! Concrete [`ClipboardPort`](cb_core::ClipboardPort) adapters: a native
//! format-enumeration adapter (Windows) and a generic multi-flavor adapter
//! built on `clipboard-rs` for everything else.

pub mod capability;
pub mod clipboard;

pub use capability::{detect_clipboard_capability, ClipboardCapability};
pub use clipboard::flavor::{ClipboardRsSource, FlavorClipboard, FlavorSource, TextFlavor};
pub use clipboard::native::{NativeClipboard, NativeClipboardApi, NativeSession, SessionState};
pub use clipboard::{PlatformClipboard, PlatformClipboardError};
