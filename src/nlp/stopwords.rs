//! Stopword filtering for keyword candidates
//!
//! Latin-script lists come from the `stop-words` crate; Chinese uses a small
//! built-in list. The keyword ranker only consults a filter when one is
//! configured, so by default every token is eligible.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Common Chinese function words. CJK tokens are whole runs, so these only
/// match runs made of a single function word.
const CHINESE: &[&str] = &[
    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及", "这",
    "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对", "将", "于",
    "我们", "你们", "他们", "以及", "因为", "所以", "如果", "但是", "这个", "那个",
];

fn latin_language(code: &str) -> Option<LANGUAGE> {
    match code {
        "en" | "english" => Some(LANGUAGE::English),
        "de" | "german" => Some(LANGUAGE::German),
        "fr" | "french" => Some(LANGUAGE::French),
        "es" | "spanish" => Some(LANGUAGE::Spanish),
        _ => None,
    }
}

/// Case-insensitive set of words excluded from keyword results
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Build a filter from `+`-separated language codes, e.g. `"en+zh"`
    ///
    /// Known codes: en, de, fr, es, zh (or their English names). Unknown
    /// codes contribute nothing.
    pub fn new(languages: &str) -> Self {
        let mut filter = Self::empty();
        for code in languages.split('+').map(|c| c.trim().to_lowercase()) {
            if code == "zh" || code == "chinese" {
                filter.extend(CHINESE.iter().copied());
            } else if let Some(lang) = latin_language(&code) {
                filter.extend(get(lang));
            } else {
                #[cfg(feature = "tracing")]
                tracing::warn!(language = %code, "no stopword list for language");
            }
        }
        filter
    }

    /// A filter that removes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a filter from an explicit word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::empty();
        filter.extend(words);
        filter
    }

    /// Add more words to the filter
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let filter = StopwordFilter::new("en");
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("pipeline"));
    }

    #[test]
    fn test_combined_languages() {
        let filter = StopwordFilter::new("EN + zh");
        assert!(filter.is_stopword("and"));
        assert!(filter.is_stopword("我们"));
        assert!(!filter.is_stopword("报告"));
    }

    #[test]
    fn test_unknown_language_is_empty() {
        assert!(StopwordFilter::new("klingon").is_empty());
    }

    #[test]
    fn test_explicit_words() {
        let mut filter = StopwordFilter::from_words(["Draft", "final"]);
        assert!(filter.is_stopword("draft"));
        assert!(!filter.is_stopword("the"));

        filter.extend(["copy", "FINAL"]);
        assert_eq!(filter.len(), 3);
        assert!(filter.is_stopword("Copy"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
