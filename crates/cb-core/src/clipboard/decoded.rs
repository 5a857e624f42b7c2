use serde::Serialize;
use std::fmt;

/// Which heuristic produced a [`DecodedText`]. Diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePath {
    Empty,
    Utf8Bom,
    Utf16BeBom,
    Utf16LeBom,
    Utf16BeHeuristic,
    Utf16LeHeuristic,
    Fallback,
}

impl DecodePath {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodePath::Empty => "empty",
            DecodePath::Utf8Bom => "utf-8 bom",
            DecodePath::Utf16BeBom => "utf-16be bom",
            DecodePath::Utf16LeBom => "utf-16le bom",
            DecodePath::Utf16BeHeuristic => "utf-16be heuristic",
            DecodePath::Utf16LeHeuristic => "utf-16le heuristic",
            DecodePath::Fallback => "utf-8 fallback",
        }
    }
}

impl fmt::Display for DecodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text recovered from a byte buffer, tagged with the decoding path taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    text: String,
    path: DecodePath,
}

impl DecodedText {
    pub fn new(text: String, path: DecodePath) -> Self {
        Self { text, path }
    }

    pub fn empty() -> Self {
        Self::new(String::new(), DecodePath::Empty)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> DecodePath {
        self.path
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
