//! Clipboard adapters and the capability-selected port handed to callers.

pub mod flavor;
pub mod native;

use cb_core::codec::FormatReport;
use cb_core::{AcquisitionConfig, ClipboardError, ClipboardPort};
use thiserror::Error;
use tracing::info;

use crate::capability::{detect_clipboard_capability, ClipboardCapability};
use flavor::{ClipboardRsSource, FlavorClipboard};
#[cfg(target_os = "windows")]
use native::{NativeClipboard, Win32ClipboardApi};

#[derive(Debug, Error)]
pub enum PlatformClipboardError {
    #[error("clipboard capability {0:?} is not available on this platform")]
    Unsupported(ClipboardCapability),

    #[error("failed to initialise clipboard backend: {0}")]
    Init(String),
}

/// The clipboard port for this process, chosen once from the detected capability.
pub enum PlatformClipboard {
    #[cfg(target_os = "windows")]
    Native(NativeClipboard<Win32ClipboardApi>),
    Flavor(FlavorClipboard<ClipboardRsSource>),
}

impl PlatformClipboard {
    pub fn new(config: AcquisitionConfig) -> Result<Self, PlatformClipboardError> {
        Self::for_capability(detect_clipboard_capability(), config)
    }

    pub fn for_capability(
        capability: ClipboardCapability,
        config: AcquisitionConfig,
    ) -> Result<Self, PlatformClipboardError> {
        info!(capability = ?capability, "Initialising clipboard adapter");
        match capability {
            ClipboardCapability::NativeFormats => Self::native(config),
            ClipboardCapability::GenericFlavors => {
                let source = ClipboardRsSource::new()
                    .map_err(|e| PlatformClipboardError::Init(e.to_string()))?;
                Ok(Self::Flavor(FlavorClipboard::new(source, config)))
            }
        }
    }

    #[cfg(target_os = "windows")]
    fn native(config: AcquisitionConfig) -> Result<Self, PlatformClipboardError> {
        Ok(Self::Native(NativeClipboard::new(Win32ClipboardApi, config)))
    }

    #[cfg(not(target_os = "windows"))]
    fn native(_config: AcquisitionConfig) -> Result<Self, PlatformClipboardError> {
        Err(PlatformClipboardError::Unsupported(
            ClipboardCapability::NativeFormats,
        ))
    }

    pub fn capability(&self) -> ClipboardCapability {
        match self {
            #[cfg(target_os = "windows")]
            Self::Native(_) => ClipboardCapability::NativeFormats,
            Self::Flavor(_) => ClipboardCapability::GenericFlavors,
        }
    }

    /// Per-format byte reports. `None` when the native clipboard stayed locked.
    pub fn dump_formats(&self) -> Option<Vec<FormatReport>> {
        match self {
            #[cfg(target_os = "windows")]
            Self::Native(native) => native.dump_formats(),
            Self::Flavor(flavor) => Some(flavor.dump_flavors()),
        }
    }
}

impl ClipboardPort for PlatformClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        match self {
            #[cfg(target_os = "windows")]
            Self::Native(native) => native.read_text(),
            Self::Flavor(flavor) => flavor.read_text(),
        }
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self {
            #[cfg(target_os = "windows")]
            Self::Native(native) => native.write_text(text),
            Self::Flavor(flavor) => flavor.write_text(text),
        }
    }
}
