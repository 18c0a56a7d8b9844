//! End-to-end suggestion pipeline
//!
//! [`Suggester`] wires the stages together for one document:
//!
//! 1. Cap the body to `max_chars` characters
//! 2. Rank keywords
//! 3. Score the title
//! 4. Build filename candidates
//!
//! No stage can fail; degenerate input produces empty keywords and a title
//! derived from the file name.

use std::path::Path;

use rayon::prelude::*;

use crate::candidates::build_candidates;
use crate::extract::{truncate_chars, DEFAULT_MAX_CHARS};
use crate::keywords::{KeywordConfig, KeywordRanker};
use crate::rules::RuleConfig;
use crate::title::TitleScorer;
use crate::types::{Suggestion, TitleCandidate};

/// Prefix used by [`Suggester::annotate_with_title`]
pub const TITLE_HINT_PREFIX: &str = "可能标题：";

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("suggest_stage", stage = $name).entered();
    };
}

/// Produces title, keywords and filename candidates for documents
#[derive(Debug, Clone)]
pub struct Suggester<'a> {
    rules: &'a RuleConfig,
    ranker: KeywordRanker,
    max_chars: usize,
}

impl<'a> Suggester<'a> {
    /// Create a suggester with default keyword settings
    pub fn new(rules: &'a RuleConfig) -> Self {
        Self {
            rules,
            ranker: KeywordRanker::new(),
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    /// Set the keyword ranking configuration
    pub fn with_keyword_config(mut self, config: KeywordConfig) -> Self {
        self.ranker = KeywordRanker::with_config(config);
        self
    }

    /// Set the body length cap, in characters
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn rules(&self) -> &RuleConfig {
        self.rules
    }

    /// Score the title of one document
    pub fn title(&self, path: impl AsRef<Path>, text: &str) -> TitleCandidate {
        let body = truncate_chars(text, self.max_chars);
        TitleScorer::new(self.rules).best_title(path, body)
    }

    /// Run the full pipeline for one document
    pub fn suggest(&self, path: impl AsRef<Path>, text: &str) -> Suggestion {
        let body = truncate_chars(text, self.max_chars);

        let keywords = {
            trace_stage!("keywords");
            self.ranker.extract_top_n(body)
        };

        let title = {
            trace_stage!("title");
            TitleScorer::new(self.rules).best_title(path.as_ref(), body)
        };

        let candidates = {
            trace_stage!("candidates");
            // An unconfident title contributes no stem
            let stem = if title.is_confident { title.text.as_str() } else { "" };
            build_candidates(stem, &keywords)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %path.as_ref().display(),
            title = %title.text,
            confidence = title.confidence,
            keywords = keywords.len(),
            candidates = candidates.len(),
            "suggestion ready"
        );

        Suggestion {
            title,
            keywords,
            candidates,
        }
    }

    /// Run the pipeline for many documents in parallel
    ///
    /// Results are returned in input order.
    pub fn suggest_batch<P>(&self, documents: &[(P, String)]) -> Vec<Suggestion>
    where
        P: AsRef<Path> + Sync,
    {
        documents
            .par_iter()
            .map(|(path, text)| self.suggest(path, text))
            .collect()
    }

    /// Prefix the body with its likely title when the title is confident
    pub fn annotate_with_title(&self, path: impl AsRef<Path>, body: &str) -> String {
        let title = self.title(path, body);
        if title.is_confident && !title.text.trim().is_empty() {
            format!("{TITLE_HINT_PREFIX}{}\n\n{body}", title.text)
        } else {
            body.to_string()
        }
    }
}

/// Run the full pipeline with the process-wide rules and default settings
pub fn suggest(path: impl AsRef<Path>, text: &str) -> Suggestion {
    Suggester::new(RuleConfig::global()).suggest(path, text)
}
