//! # rapid-rename
//!
//! Suggests replacement file names for a document from its plain-text body.
//!
//! The crate infers a likely title with a configurable line-scoring
//! heuristic, ranks keywords with a TextRank co-occurrence graph, and
//! assembles both into sanitized, deduplicated filename candidates.
//!
//! ```
//! use rapid_rename::{RuleConfig, Suggester};
//!
//! let rules = RuleConfig::default();
//! let suggestion = Suggester::new(&rules).suggest("doc1.txt", "年度工作报告\n\n本报告总结了...");
//!
//! assert_eq!(suggestion.title.text, "年度工作报告");
//! assert_eq!(suggestion.candidates[0], "年度工作报告");
//! ```
//!
//! ## Modules
//!
//! - [`nlp`]: script-run tokenizer and stopword filtering
//! - [`graph`], [`pagerank`]: co-occurrence graph and rank propagation
//! - [`keywords`]: top-N keyword extraction
//! - [`rules`]: title scoring rules and the rule file loader
//! - [`title`]: heuristic title scorer
//! - [`candidates`]: filename candidate assembly and sanitization
//! - [`extract`]: document kinds and the plain-text reader
//! - [`suggest`]: the end-to-end pipeline

pub mod candidates;
pub mod errors;
pub mod extract;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod rules;
pub mod suggest;
pub mod title;
pub mod types;

pub use candidates::{build_candidates, sanitize};
pub use errors::{ExtractError, RuleLoadError};
pub use extract::{read_text, DocumentKind};
pub use keywords::{extract_top_n, KeywordConfig, KeywordRanker};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{tokenize, TokenOrder, Tokenizer};
pub use rules::RuleConfig;
pub use suggest::{suggest, Suggester};
pub use title::{get_best_title, TitleScorer};
pub use types::{Keyword, Suggestion, TitleCandidate, Token, TokenClass};
