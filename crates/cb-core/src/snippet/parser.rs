use super::model::SnippetModelBuilder;
use super::{ElementType, SnippetModel};
use crate::codec::starts_with_open_marker;
use crate::error::ConversionError;
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

/// Root tag every accepted document must carry (compared ignoring ASCII case).
pub const ROOT_TAG: &str = "fmxmlsnippet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameList {
    Fields,
    Layouts,
    Scripts,
}

struct TagRule {
    tag: &'static str,
    element_type: ElementType,
    names: Option<NameList>,
}

const TAG_RULES: &[TagRule] = &[
    TagRule { tag: "field", element_type: ElementType::Fields, names: Some(NameList::Fields) },
    TagRule { tag: "fielddefinition", element_type: ElementType::Fields, names: Some(NameList::Fields) },
    TagRule { tag: "layout", element_type: ElementType::Layouts, names: Some(NameList::Layouts) },
    TagRule { tag: "script", element_type: ElementType::Scripts, names: Some(NameList::Scripts) },
    TagRule { tag: "step", element_type: ElementType::Scripts, names: None },
    TagRule { tag: "basetable", element_type: ElementType::Tables, names: None },
    TagRule { tag: "table", element_type: ElementType::Tables, names: None },
    TagRule { tag: "customfunction", element_type: ElementType::CustomFunctions, names: None },
    TagRule { tag: "valuelist", element_type: ElementType::ValueLists, names: None },
];

/// Parses `<fmxmlsnippet>` text into a [`SnippetModel`].
///
/// DTDs are refused outright, so neither internal nor external entities can
/// be declared, and undeclared entity references fail the parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlValidatingParser;

impl XmlValidatingParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, xml: &str) -> Result<SnippetModel, ConversionError> {
        let source = xml.trim();
        let options = ParsingOptions {
            allow_dtd: false,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(source, options)
            .map_err(|e| ConversionError::MalformedDocument(e.to_string()))?;

        let root = document.root_element();
        let root_name = root.tag_name().name();
        if !root_name.eq_ignore_ascii_case(ROOT_TAG) {
            return Err(ConversionError::MalformedDocument(format!(
                "unexpected root element <{root_name}>, expected <{ROOT_TAG}>"
            )));
        }

        // A prefixed root such as `<a:fmxmlsnippet>` is a different tag to FileMaker.
        let raw_xml = &source[root.range()];
        if !starts_with_open_marker(raw_xml) {
            return Err(ConversionError::MalformedDocument(format!(
                "root element must be an unprefixed <{ROOT_TAG}>"
            )));
        }

        if !root.children().any(|child| child.is_element()) {
            return Err(ConversionError::EmptyDocument);
        }

        let mut builder = SnippetModelBuilder {
            version: attribute_ignore_case(&root, "version"),
            type_hint: attribute_ignore_case(&root, "type"),
            ..SnippetModelBuilder::default()
        };

        // Pre-order, document order; `descendants` yields the root first.
        for node in root.descendants().skip(1).filter(Node::is_element) {
            let tag = node.tag_name().name();
            let Some(rule) = TAG_RULES.iter().find(|r| tag.eq_ignore_ascii_case(r.tag)) else {
                continue;
            };

            builder.record(rule.element_type);
            if let Some(list) = rule.names {
                if let Some(name) = attribute_ignore_case(&node, "name") {
                    match list {
                        NameList::Fields => builder.field_names.push(name),
                        NameList::Layouts => builder.layout_names.push(name),
                        NameList::Scripts => builder.script_names.push(name),
                    }
                }
            }
        }

        let model = builder.build(raw_xml.to_string());
        debug!(
            element_types = %model.element_types(),
            fields = model.field_names().len(),
            layouts = model.layout_names().len(),
            scripts = model.script_names().len(),
            "Parsed fmxmlsnippet"
        );
        Ok(model)
    }
}

/// Non-blank trimmed attribute value, matching the attribute name ignoring ASCII case.
fn attribute_ignore_case(node: &Node<'_, '_>, name: &str) -> Option<String> {
    node.attributes()
        .find(|attr| attr.name().eq_ignore_ascii_case(name))
        .map(|attr| attr.value().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
