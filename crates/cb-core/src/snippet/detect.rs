//! Contains-based heuristics over snippet text.
//!
//! These never replace the tree walk in [`XmlValidatingParser`](super::XmlValidatingParser);
//! they exist for cheap pre-checks and human-facing summaries.

use super::{ElementType, ElementTypes};
use crate::codec::contains_open_marker;

const KEYWORDS: &[(&str, ElementType)] = &[
    ("<field", ElementType::Fields),
    ("<fielddefinition", ElementType::Fields),
    ("<script", ElementType::Scripts),
    ("<step", ElementType::Scripts),
    ("<layout", ElementType::Layouts),
    ("layoutobjects", ElementType::Layouts),
    ("<object", ElementType::Layouts),
    ("<basetable", ElementType::Tables),
    ("<table", ElementType::Tables),
    ("<customfunction", ElementType::CustomFunctions),
    ("<valuelist", ElementType::ValueLists),
];

/// Keyword scan classification. Empty collapses to `{Unknown}`.
pub fn detect_types(xml: &str) -> ElementTypes {
    let lower = xml.to_ascii_lowercase();
    KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, element_type)| *element_type)
        .collect()
}

/// Quick yes/no on whether `text` is worth a full parse.
pub fn is_likely_snippet(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    contains_open_marker(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_types_by_keyword() {
        let types = detect_types("<fmxmlsnippet><FIELD name='a'/><Step/></fmxmlsnippet>");
        assert_eq!(
            types,
            ElementTypes::from_iter([ElementType::Fields, ElementType::Scripts])
        );
    }

    #[test]
    fn test_detect_types_sees_layout_objects() {
        let types = detect_types("<fmxmlsnippet><LayoutObjects><Object/></LayoutObjects></fmxmlsnippet>");
        assert!(types.is_exactly(ElementType::Layouts));
    }

    #[test]
    fn test_detect_types_without_keywords_is_unknown() {
        assert!(detect_types("<fmxmlsnippet><Mystery/></fmxmlsnippet>").is_unknown());
        assert!(detect_types("").is_unknown());
    }

    #[test]
    fn test_is_likely_snippet() {
        assert!(is_likely_snippet("  <FMXMLSNIPPET type=\"FMObjectList\">"));
        assert!(!is_likely_snippet("   \n "));
        assert!(!is_likely_snippet("<?xml version=\"1.0\"?><root/>"));
        assert!(!is_likely_snippet("plain words"));
    }
}
