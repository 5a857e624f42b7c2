use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Object category a snippet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ElementType {
    Fields,
    Scripts,
    Tables,
    Layouts,
    CustomFunctions,
    ValueLists,
    Unknown,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Fields => "Fields",
            ElementType::Scripts => "Scripts",
            ElementType::Tables => "Tables",
            ElementType::Layouts => "Layouts",
            ElementType::CustomFunctions => "CustomFunctions",
            ElementType::ValueLists => "ValueLists",
            ElementType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty set of [`ElementType`]s.
///
/// `Unknown` is never stored next to a real category: an empty
/// classification collapses to `{Unknown}` and any real category evicts it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ElementTypes(BTreeSet<ElementType>);

impl ElementTypes {
    pub fn unknown() -> Self {
        Self(BTreeSet::from([ElementType::Unknown]))
    }

    pub fn contains(&self, element_type: ElementType) -> bool {
        self.0.contains(&element_type)
    }

    pub fn contains_any(&self, element_types: &[ElementType]) -> bool {
        element_types.iter().any(|t| self.contains(*t))
    }

    /// `true` when the set holds `element_type` and nothing else.
    pub fn is_exactly(&self, element_type: ElementType) -> bool {
        self.0.len() == 1 && self.contains(element_type)
    }

    pub fn is_unknown(&self) -> bool {
        self.is_exactly(ElementType::Unknown)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementType> + '_ {
        self.0.iter().copied()
    }
}

impl Default for ElementTypes {
    fn default() -> Self {
        Self::unknown()
    }
}

impl FromIterator<ElementType> for ElementTypes {
    fn from_iter<I: IntoIterator<Item = ElementType>>(iter: I) -> Self {
        let known: BTreeSet<_> = iter
            .into_iter()
            .filter(|t| *t != ElementType::Unknown)
            .collect();
        if known.is_empty() {
            Self::unknown()
        } else {
            Self(known)
        }
    }
}

impl fmt::Display for ElementTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(ElementType::as_str).collect();
        f.write_str(&names.join(", "))
    }
}
