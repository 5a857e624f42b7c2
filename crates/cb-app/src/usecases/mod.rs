//! Business logic use cases
//!
//! The converters under [`snippet`] are pure and never touch the clipboard.
//! The two use cases here pair them with a clipboard port.

pub mod push_snippet_to_clipboard;
pub mod read_snippet_from_clipboard;
pub mod snippet;

pub use push_snippet_to_clipboard::{PushSnippetError, PushSnippetToClipboard};
pub use read_snippet_from_clipboard::{ReadSnippetError, ReadSnippetFromClipboard};
