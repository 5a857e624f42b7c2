use std::sync::Arc;

use cb_core::{ClipboardError, ClipboardPort, ConversionError, SnippetModel};
use thiserror::Error;
use tracing::{debug, info, info_span};

use super::snippet::InboundConverter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadSnippetError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Use case for acquiring a snippet from the system clipboard.
/// 从系统剪贴板读取片段的用例。
pub struct ReadSnippetFromClipboard {
    clipboard: Arc<dyn ClipboardPort>,
    converter: InboundConverter,
}

impl ReadSnippetFromClipboard {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self {
            clipboard,
            converter: InboundConverter::new(),
        }
    }

    /// Read clipboard text and convert it.
    ///
    /// An empty clipboard and one holding unreadable data both end as
    /// [`ConversionError::NoRecognizableContent`]. Only an unavailable
    /// clipboard is reported as a clipboard fault.
    pub fn execute(&self) -> Result<SnippetModel, ReadSnippetError> {
        let span = info_span!("usecase.snippet.read_from_clipboard.execute");
        let _guard = span.enter();

        let text = match self.clipboard.read_text() {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("Clipboard holds no text");
                return Err(ConversionError::NoRecognizableContent.into());
            }
            Err(ClipboardError::Unreadable(detail)) => {
                debug!(detail = %detail, "Clipboard content unreadable as text");
                return Err(ConversionError::NoRecognizableContent.into());
            }
            Err(err) => return Err(err.into()),
        };

        let model = self.converter.convert(&text)?;
        info!(
            summary = %model.summary(),
            xml_len = model.raw_xml().len(),
            "Read snippet from clipboard"
        );
        Ok(model)
    }
}
