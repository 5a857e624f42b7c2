//! Validated snippet documents and their classification.

mod detect;
mod element_type;
mod model;
mod parser;

pub use detect::{detect_types, is_likely_snippet};
pub use element_type::{ElementType, ElementTypes};
pub use model::SnippetModel;
pub use parser::{XmlValidatingParser, ROOT_TAG};
