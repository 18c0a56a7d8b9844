//! Core data types shared across the crate

use serde::{Deserialize, Serialize};

/// Script class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    /// A contiguous run of CJK ideographs, kept verbatim
    Cjk,
    /// A run of ASCII letters, digits and underscores, lower-cased
    Word,
}

/// A single token produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Normalized token text
    pub text: String,
    /// Which run type produced this token
    pub class: TokenClass,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, class: TokenClass) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }
}

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub token: String,
    pub score: f64,
}

impl Keyword {
    pub fn new(token: impl Into<String>, score: f64) -> Self {
        Self {
            token: token.into(),
            score,
        }
    }
}

/// The line picked as the most likely document title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleCandidate {
    /// Normalized title text
    pub text: String,
    /// Raw heuristic weight
    pub weight: f64,
    /// Weight relative to the mean weight of all scored lines
    pub confidence: f64,
    /// Whether `confidence` reached the configured cutoff
    pub is_confident: bool,
    /// Raw line index the title came from; `None` when it was derived from
    /// the file name
    pub source_line: Option<usize>,
}

impl TitleCandidate {
    /// Title derived from the file name when no line could be scored
    pub fn from_file_stem(stem: impl Into<String>) -> Self {
        Self {
            text: stem.into(),
            weight: 0.0,
            confidence: 1.0,
            is_confident: true,
            source_line: None,
        }
    }

    /// Signed line index, `-1` when derived from the file name
    pub fn source_line_index(&self) -> i64 {
        self.source_line.map_or(-1, |i| i as i64)
    }

    /// Returns `true` if the title came from the file name
    pub fn is_from_file_name(&self) -> bool {
        self.source_line.is_none()
    }
}

/// Full result of a suggestion run for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: TitleCandidate,
    pub keywords: Vec<Keyword>,
    /// Ordered, sanitized, deduplicated filename candidates
    pub candidates: Vec<String>,
}
