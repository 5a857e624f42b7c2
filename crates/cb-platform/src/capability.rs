//! Platform capability detection for clipboard access.
//!
//! Resolved once at startup; the result picks which adapter backs the
//! clipboard port for the life of the process.

/// Which acquisition strategy the current platform supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCapability {
    /// Per-format enumeration with raw byte access (Win32 clipboard).
    NativeFormats,
    /// Text plus named flavors through `clipboard-rs` (macOS pasteboard, X11/Wayland).
    GenericFlavors,
}

/// Detect the clipboard capability of the current platform.
///
/// - **Windows**: `NativeFormats`
/// - **Everything else**: `GenericFlavors`
pub fn detect_clipboard_capability() -> ClipboardCapability {
    #[cfg(target_os = "windows")]
    {
        tracing::debug!("Windows detected, using native clipboard format enumeration");
        ClipboardCapability::NativeFormats
    }

    #[cfg(not(target_os = "windows"))]
    {
        tracing::debug!("Using generic clipboard flavors");
        ClipboardCapability::GenericFlavors
    }
}
