use cb_core::snippet::{detect_types, is_likely_snippet};
use cb_core::{ConversionError, SnippetExtractor, SnippetModel, XmlValidatingParser};
use tracing::debug;

/// Clipboard text to validated snippet.
/// 将剪贴板文本转换为经过校验的片段模型。
///
/// Operates on text a caller already obtained from a clipboard port; it never
/// touches the clipboard itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct InboundConverter {
    parser: XmlValidatingParser,
}

impl InboundConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locate the marker span in `clipboard_text` and parse it.
    ///
    /// # Errors
    /// - [`ConversionError::NoRecognizableContent`] when no marker span exists
    /// - [`ConversionError::MalformedDocument`] / [`ConversionError::EmptyDocument`]
    ///   from the parser
    pub fn convert(&self, clipboard_text: &str) -> Result<SnippetModel, ConversionError> {
        if !is_likely_snippet(clipboard_text) {
            debug!(text_len = clipboard_text.len(), "No open marker in clipboard text");
            return Err(ConversionError::NoRecognizableContent);
        }

        let span = SnippetExtractor::from_text(clipboard_text).ok_or_else(|| {
            debug!(text_len = clipboard_text.len(), "Open marker present but no complete span");
            ConversionError::NoRecognizableContent
        })?;

        let model = self.parser.parse(&span)?;

        // The tree walk is authoritative; the keyword scan only feeds summaries.
        let keyword_types = detect_types(&span);
        if &keyword_types != model.element_types() {
            debug!(
                tree = %model.element_types(),
                keywords = %keyword_types,
                "Keyword scan disagrees with tree classification, keeping tree result"
            );
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::ElementType;

    #[test]
    fn test_convert_cuts_snippet_out_of_noise() {
        let input = "Noise before\n<fmxmlsnippet>\n  <FieldDefinition name=\"Test\"/>\n</fmxmlsnippet>\nnoise after";
        let model = InboundConverter::new().convert(input).unwrap();

        assert_eq!(
            model.raw_xml(),
            "<fmxmlsnippet>\n  <FieldDefinition name=\"Test\"/>\n</fmxmlsnippet>"
        );
        assert!(model.element_types().is_exactly(ElementType::Fields));
        assert_eq!(model.field_names(), ["Test"]);
    }

    #[test]
    fn test_convert_without_marker_is_no_content() {
        for input in ["", "   ", "just some copied prose", "<root><Field/></root>"] {
            assert_eq!(
                InboundConverter::new().convert(input),
                Err(ConversionError::NoRecognizableContent),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_convert_unterminated_snippet_is_no_content() {
        assert_eq!(
            InboundConverter::new().convert("<fmxmlsnippet><Step/>"),
            Err(ConversionError::NoRecognizableContent)
        );
    }

    #[test]
    fn test_parser_faults_pass_through() {
        let converter = InboundConverter::new();
        assert_eq!(
            converter.convert("x <fmxmlsnippet type=\"FMObjectList\"></fmxmlsnippet> y"),
            Err(ConversionError::EmptyDocument)
        );
        assert!(matches!(
            converter.convert("<fmxmlsnippet><Field></fmxmlsnippet>"),
            Err(ConversionError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_tree_classification_wins_over_keywords() {
        // The commented-out `<Object>` fools the keyword scan into Layouts.
        let input = r#"<fmxmlsnippet><Script name="Cleanup"><!-- <Object/> --></Script></fmxmlsnippet>"#;
        let model = InboundConverter::new().convert(input).unwrap();
        assert!(model.element_types().is_exactly(ElementType::Scripts));
    }
}
