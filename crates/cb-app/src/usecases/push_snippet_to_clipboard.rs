use std::sync::Arc;

use cb_core::{ClipboardError, ClipboardPort, ConversionError, SnippetModel};
use thiserror::Error;
use tracing::{info, info_span};

use super::snippet::OutboundConverter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PushSnippetError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Use case for placing a validated snippet on the system clipboard.
/// 将校验后的片段写入系统剪贴板的用例。
pub struct PushSnippetToClipboard {
    clipboard: Arc<dyn ClipboardPort>,
    converter: OutboundConverter,
}

impl PushSnippetToClipboard {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self {
            clipboard,
            converter: OutboundConverter::new(),
        }
    }

    /// Validate `xml_text`, then write its canonical form.
    ///
    /// Nothing is written when validation or gating fails. Returns the model
    /// that was written so callers can describe it.
    pub fn execute(&self, xml_text: &str) -> Result<SnippetModel, PushSnippetError> {
        let span = info_span!(
            "usecase.snippet.push_to_clipboard.execute",
            input_len = xml_text.len(),
        );
        let _guard = span.enter();

        let model = self.converter.prepare(xml_text)?;
        self.clipboard.write_text(model.raw_xml())?;

        info!(summary = %model.summary(), "Pushed snippet to clipboard");
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::ports::MockClipboard;

    const FIELDS: &str = "<fmxmlsnippet type=\"FMObjectList\"><Field name=\"Amount\"/></fmxmlsnippet>";

    #[test]
    fn test_execute_writes_canonical_xml() {
        let mut mock = MockClipboard::new();
        mock.expect_write_text()
            .withf(|text| text == FIELDS)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = PushSnippetToClipboard::new(Arc::new(mock));
        let model = use_case.execute(&format!("\n{FIELDS}\n")).unwrap();
        assert_eq!(model.field_names(), ["Amount"]);
    }

    #[test]
    fn test_rejected_snippet_is_never_written() {
        let mut mock = MockClipboard::new();
        mock.expect_write_text().never();

        let use_case = PushSnippetToClipboard::new(Arc::new(mock));
        let result = use_case.execute("<fmxmlsnippet><Layout name=\"Home\"/></fmxmlsnippet>");
        assert!(matches!(
            result,
            Err(PushSnippetError::Conversion(
                ConversionError::UnsupportedSnippetType { .. }
            ))
        ));
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let mut mock = MockClipboard::new();
        mock.expect_write_text()
            .returning(|_| Err(ClipboardError::Unavailable("locked".into())));

        let use_case = PushSnippetToClipboard::new(Arc::new(mock));
        assert_eq!(
            use_case.execute(FIELDS),
            Err(PushSnippetError::Clipboard(ClipboardError::Unavailable(
                "locked".into()
            )))
        );
    }
}
