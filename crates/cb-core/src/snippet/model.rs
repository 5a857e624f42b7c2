use super::{ElementType, ElementTypes};
use serde::Serialize;
use std::collections::BTreeMap;

/// A validated `<fmxmlsnippet>` document.
///
/// Only [`XmlValidatingParser`](super::XmlValidatingParser) builds these, and
/// nothing mutates one afterwards. `raw_xml` is the root element's exact
/// source text: it starts with the opening root tag and ends with the
/// closing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetModel {
    raw_xml: String,
    version: Option<String>,
    type_hint: Option<String>,
    element_types: ElementTypes,
    field_names: Vec<String>,
    layout_names: Vec<String>,
    script_names: Vec<String>,
    #[serde(skip)]
    counts: BTreeMap<ElementType, usize>,
}

/// Mutable accumulator used during the tree walk.
#[derive(Debug, Default)]
pub(crate) struct SnippetModelBuilder {
    pub(crate) version: Option<String>,
    pub(crate) type_hint: Option<String>,
    pub(crate) field_names: Vec<String>,
    pub(crate) layout_names: Vec<String>,
    pub(crate) script_names: Vec<String>,
    pub(crate) counts: BTreeMap<ElementType, usize>,
}

impl SnippetModelBuilder {
    pub(crate) fn record(&mut self, element_type: ElementType) {
        *self.counts.entry(element_type).or_default() += 1;
    }

    pub(crate) fn build(self, raw_xml: String) -> SnippetModel {
        SnippetModel {
            raw_xml,
            version: self.version,
            type_hint: self.type_hint,
            element_types: self.counts.keys().copied().collect(),
            field_names: self.field_names,
            layout_names: self.layout_names,
            script_names: self.script_names,
            counts: self.counts,
        }
    }
}

impl SnippetModel {
    pub fn raw_xml(&self) -> &str {
        &self.raw_xml
    }

    pub fn into_raw_xml(self) -> String {
        self.raw_xml
    }

    /// Value of the root `version` attribute.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Value of the root `type` attribute, e.g. `FMObjectList`.
    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref()
    }

    pub fn element_types(&self) -> &ElementTypes {
        &self.element_types
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn layout_names(&self) -> &[String] {
        &self.layout_names
    }

    pub fn script_names(&self) -> &[String] {
        &self.script_names
    }

    /// Number of recognised elements contributing to `element_type`.
    pub fn count(&self, element_type: ElementType) -> usize {
        self.counts.get(&element_type).copied().unwrap_or(0)
    }

    /// One-line description, e.g. `Fields: 3, Scripts: 12`.
    pub fn summary(&self) -> String {
        if self.element_types.is_unknown() {
            return "Unknown snippet".to_string();
        }
        self.element_types
            .iter()
            .map(|t| format!("{}: {}", t, self.count(t)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
