//! Rule file schema.
//!
//! Every field is optional: a rule file only needs to carry the values it
//! wants to change. Keys are camelCase; the PascalCase spelling of each key
//! is accepted too. Absent, zero and empty values leave the built-in default
//! in place (see [`super::RuleConfig::merged_with`]).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "version": 1,
//!   "confidenceCutoff": 0.6,
//!   "maxCandidateLines": 20,
//!   "idealTitleLength": { "min": 6, "max": 40 },
//!   "weights": {
//!     "position": { "line1": 1.0, "line2_3": 0.8, "line4_5": 0.6, "others": 0.4 },
//!     "uppercaseBonus": 0.25,
//!     "keywordBonus": 0.35,
//!     "filenameBonus": 0.35,
//!     "lengthPenalty": 0.30,
//!     "digitPenalty": 0.30,
//!     "punctuationPenalty": 0.25,
//!     "stopwordPenalty": 0.50
//!   },
//!   "stopwords": ["目录", "contents"],
//!   "keywords": { "zh": ["报告"], "en": ["Report"] },
//!   "punctuation": [".", "。"]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level rule file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleFile {
    #[serde(default, alias = "Version")]
    pub version: Option<u32>,

    #[serde(default, alias = "ConfidenceCutoff")]
    pub confidence_cutoff: Option<f64>,

    #[serde(default, alias = "MaxCandidateLines")]
    pub max_candidate_lines: Option<usize>,

    #[serde(default, alias = "IdealTitleLength")]
    pub ideal_title_length: Option<IdealLengthSpec>,

    #[serde(default, alias = "Weights")]
    pub weights: Option<WeightsSpec>,

    #[serde(default, alias = "Stopwords")]
    pub stopwords: Option<Vec<String>>,

    #[serde(default, alias = "Keywords")]
    pub keywords: Option<KeywordsSpec>,

    #[serde(default, alias = "Punctuation")]
    pub punctuation: Option<Vec<String>>,
}

/// Ideal title length range, in characters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdealLengthSpec {
    #[serde(default, alias = "Min")]
    pub min: Option<usize>,
    #[serde(default, alias = "Max")]
    pub max: Option<usize>,
}

/// Bonus and penalty weights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsSpec {
    #[serde(default, alias = "Position")]
    pub position: Option<PositionWeightsSpec>,
    #[serde(default, alias = "UppercaseBonus")]
    pub uppercase_bonus: Option<f64>,
    #[serde(default, alias = "KeywordBonus")]
    pub keyword_bonus: Option<f64>,
    #[serde(default, alias = "FilenameBonus")]
    pub filename_bonus: Option<f64>,
    #[serde(default, alias = "LengthPenalty")]
    pub length_penalty: Option<f64>,
    #[serde(default, alias = "DigitPenalty")]
    pub digit_penalty: Option<f64>,
    #[serde(default, alias = "PunctuationPenalty")]
    pub punctuation_penalty: Option<f64>,
    #[serde(default, alias = "StopwordPenalty")]
    pub stopword_penalty: Option<f64>,
}

/// Per-position base weights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionWeightsSpec {
    #[serde(default, alias = "Line1")]
    pub line1: Option<f64>,
    #[serde(default, rename = "line2_3", alias = "Line2_3")]
    pub line2_3: Option<f64>,
    #[serde(default, rename = "line4_5", alias = "Line4_5")]
    pub line4_5: Option<f64>,
    #[serde(default, alias = "Others")]
    pub others: Option<f64>,
}

/// Title keyword lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsSpec {
    /// Matched case-sensitively
    #[serde(default, alias = "Zh")]
    pub zh: Option<Vec<String>>,
    /// Matched case-insensitively
    #[serde(default, alias = "En")]
    pub en: Option<Vec<String>>,
}
