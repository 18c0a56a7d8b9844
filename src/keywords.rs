//! Keyword extraction
//!
//! Tokenizes the body, builds a window co-occurrence graph, runs the
//! fixed-iteration TextRank recurrence and returns the best-scoring tokens.
//! Ties are broken by first-seen order of the token in the (truncated) token
//! sequence, so results are reproducible run to run.

use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{TokenOrder, Tokenizer};
use crate::pagerank::standard::StandardPageRank;
use crate::types::{Keyword, Token};

/// Configuration for keyword ranking
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    /// Number of keywords to return
    pub top_n: usize,
    /// Co-occurrence window size
    pub window: usize,
    /// Tokens beyond this count are ignored
    pub max_tokens: usize,
    /// Damping factor
    pub damping: f64,
    /// Number of propagation rounds
    pub iterations: usize,
    /// Cross-script token order
    pub order: TokenOrder,
    /// Optional stopword filter applied to the ranked result
    pub stopwords: Option<StopwordFilter>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            window: 4,
            max_tokens: 2000,
            damping: 0.85,
            iterations: 20,
            order: TokenOrder::ScriptPasses,
            stopwords: None,
        }
    }
}

impl KeywordConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_order(mut self, order: TokenOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Some(stopwords);
        self
    }
}

/// TextRank keyword ranker
#[derive(Debug, Clone, Default)]
pub struct KeywordRanker {
    config: KeywordConfig,
}

impl KeywordRanker {
    /// Create a ranker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: KeywordConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// Extract the top-N keywords of `text`, best first
    pub fn extract_top_n(&self, text: &str) -> Vec<Keyword> {
        let tokens: Vec<Token> = Tokenizer::new()
            .with_order(self.config.order)
            .tokens(text)
            .take(self.config.max_tokens)
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let builder = GraphBuilder::from_tokens(&tokens, self.config.window);
        let graph = CsrGraph::from_builder(&builder);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tokens = tokens.len(),
            nodes = graph.num_nodes,
            edges = graph.num_edges() / 2,
            "built co-occurrence graph"
        );

        let result = StandardPageRank::new()
            .with_damping(self.config.damping)
            .with_iterations(self.config.iterations)
            .run(&graph);

        result
            .ranked()
            .into_iter()
            .map(|(node, score)| (graph.token(node), score))
            .filter(|(token, _)| self.is_candidate(token))
            .take(self.config.top_n)
            .map(|(token, score)| Keyword::new(token, score))
            .collect()
    }

    fn is_candidate(&self, token: &str) -> bool {
        if token.chars().count() < 2 {
            return false;
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        match &self.config.stopwords {
            Some(filter) => !filter.is_stopword(token),
            None => true,
        }
    }
}

/// Extract keywords with explicit limits and otherwise default settings
pub fn extract_top_n(text: &str, top_n: usize, window: usize, max_tokens: usize) -> Vec<Keyword> {
    let config = KeywordConfig::default()
        .with_top_n(top_n)
        .with_window(window)
        .with_max_tokens(max_tokens);
    KeywordRanker::with_config(config).extract_top_n(text)
}
