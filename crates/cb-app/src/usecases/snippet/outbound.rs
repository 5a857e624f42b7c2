use cb_core::{ConversionError, ElementType, SnippetModel, UnsupportedReason, XmlValidatingParser};
use tracing::debug;

const SUPPORTED: &[ElementType] = &[ElementType::Fields, ElementType::Scripts];

/// Validated snippet to clipboard payload, gated on supported categories.
/// 校验片段并按支持的类别放行，生成写回剪贴板的内容。
#[derive(Debug, Clone, Copy, Default)]
pub struct OutboundConverter {
    parser: XmlValidatingParser,
}

impl OutboundConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `xml_text` and return the canonical payload, the model's `raw_xml`
    /// unchanged.
    pub fn to_clipboard_payload(&self, xml_text: &str) -> Result<String, ConversionError> {
        self.prepare(xml_text).map(SnippetModel::into_raw_xml)
    }

    /// Parse and gate, keeping the model for callers that report on it.
    pub fn prepare(&self, xml_text: &str) -> Result<SnippetModel, ConversionError> {
        let model = self.parser.parse(xml_text)?;
        Self::check_supported(&model)?;
        Ok(model)
    }

    /// Pure layout snippets are refused, as is anything without fields or steps.
    pub fn check_supported(model: &SnippetModel) -> Result<(), ConversionError> {
        let found = model.element_types();

        let reason = if found.is_exactly(ElementType::Layouts) {
            UnsupportedReason::LayoutOnly
        } else if !found.contains_any(SUPPORTED) {
            UnsupportedReason::NoSupportedCategory
        } else {
            return Ok(());
        };

        debug!(found = %found, reason = %reason, "Rejecting snippet for clipboard");
        Err(ConversionError::UnsupportedSnippetType {
            found: found.clone(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::ElementTypes;

    #[test]
    fn test_supported_snippet_is_returned_verbatim() {
        let xml = "\n  <fmxmlsnippet type=\"FMObjectList\"><Step id=\"1\"/></fmxmlsnippet>  \n";
        let payload = OutboundConverter::new().to_clipboard_payload(xml).unwrap();
        assert_eq!(payload, xml.trim());
    }

    #[test]
    fn test_mixed_layout_and_fields_is_accepted() {
        let xml = "<fmxmlsnippet><Layout name=\"L\"/><Field name=\"F\"/></fmxmlsnippet>";
        assert!(OutboundConverter::new().to_clipboard_payload(xml).is_ok());
    }

    #[test]
    fn test_layout_only_is_rejected() {
        let err = OutboundConverter::new()
            .to_clipboard_payload("<fmxmlsnippet><Layout name=\"Home\"/></fmxmlsnippet>")
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedSnippetType {
                found: ElementTypes::from_iter([ElementType::Layouts]),
                reason: UnsupportedReason::LayoutOnly,
            }
        );
    }

    #[test]
    fn test_categories_without_fields_or_scripts_are_rejected() {
        for (body, found) in [
            ("<BaseTable name=\"T\"/>", ElementType::Tables),
            ("<CustomFunction name=\"C\"/>", ElementType::CustomFunctions),
            ("<ValueList name=\"V\"/>", ElementType::ValueLists),
            ("<Mystery/>", ElementType::Unknown),
        ] {
            let err = OutboundConverter::new()
                .to_clipboard_payload(&format!("<fmxmlsnippet>{body}</fmxmlsnippet>"))
                .unwrap_err();
            assert_eq!(
                err,
                ConversionError::UnsupportedSnippetType {
                    found: ElementTypes::from_iter([found]),
                    reason: UnsupportedReason::NoSupportedCategory,
                },
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_parse_faults_surface_before_gating() {
        assert_eq!(
            OutboundConverter::new().to_clipboard_payload("<fmxmlsnippet/>"),
            Err(ConversionError::EmptyDocument)
        );
    }
}
