//! Heuristic title detection
//!
//! Scores the first lines of a document body and picks the one that looks
//! most like a title. The weight of a line is its position weight plus
//! weighted bonuses (uppercase ratio, keyword hit, file name similarity)
//! minus weighted penalties (length, digits, punctuation, stopwords). The
//! winner's confidence is its weight relative to the mean weight of all
//! scored lines.

pub mod features;

use std::path::Path;

use crate::rules::RuleConfig;
use crate::types::TitleCandidate;
use features::{
    digit_ratio, filename_similarity, keyword_hit, length_penalty, normalize, normalize_line,
    punctuation_hit, stopword_hit, uppercase_ratio,
};

/// Mean weights at or below this are treated as zero
const MEAN_EPSILON: f64 = 1e-6;

/// Split on `\r\n`, `\n` or `\r`, trim, and keep at most `max_lines` lines
///
/// Blank lines count toward the limit.
pub fn split_lines(text: &str, max_lines: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() && lines.len() < max_lines {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) => {
                lines.push(rest[..i].trim());
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => {
                lines.push(rest.trim());
                rest = "";
            }
        }
    }
    lines
}

/// Normalized file name without extension
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| normalize(&s.to_string_lossy()))
        .unwrap_or_default()
}

/// Scores candidate lines against a [`RuleConfig`]
#[derive(Debug, Clone, Copy)]
pub struct TitleScorer<'a> {
    rules: &'a RuleConfig,
}

impl<'a> TitleScorer<'a> {
    pub fn new(rules: &'a RuleConfig) -> Self {
        Self { rules }
    }

    /// Weight of a normalized line at raw index `index`
    pub fn line_weight(&self, line: &str, index: usize, stem: &str) -> f64 {
        let w = &self.rules.weights;
        let len = line.chars().count();

        w.position.for_index(index)
            + uppercase_ratio(line) * w.uppercase_bonus
            + keyword_hit(line, &self.rules.keywords) * w.keyword_bonus
            + filename_similarity(line, stem) * w.filename_bonus
            - length_penalty(len, self.rules.ideal_title_length) * w.length_penalty
            - digit_ratio(line) * w.digit_penalty
            - punctuation_hit(line, &self.rules.punctuation) * w.punctuation_penalty
            - stopword_hit(line, &self.rules.stopwords) * w.stopword_penalty
    }

    /// Pick the most title-like line of `text`
    ///
    /// Falls back to the file stem when no line survives normalization.
    pub fn best_title(&self, path: impl AsRef<Path>, text: &str) -> TitleCandidate {
        let stem = file_stem(path.as_ref());

        let scored: Vec<(usize, String, f64)> =
            split_lines(text, self.rules.max_candidate_lines)
                .into_iter()
                .enumerate()
                .filter_map(|(i, raw)| {
                    let line = normalize_line(raw);
                    if line.trim().is_empty() {
                        return None;
                    }
                    let weight = self.line_weight(&line, i, &stem);
                    Some((i, line, weight))
                })
                .collect();

        if scored.is_empty() {
            return TitleCandidate::from_file_stem(stem);
        }

        let mean = scored.iter().map(|(_, _, w)| w).sum::<f64>() / scored.len() as f64;

        // First line wins ties
        let mut best = &scored[0];
        for candidate in &scored[1..] {
            if candidate.2 > best.2 {
                best = candidate;
            }
        }

        let (index, text, weight) = best;
        let confidence = if mean <= MEAN_EPSILON {
            1.0
        } else {
            weight / mean
        };

        TitleCandidate {
            text: text.clone(),
            weight: *weight,
            confidence,
            is_confident: confidence >= self.rules.confidence_cutoff,
            source_line: Some(*index),
        }
    }
}

/// Pick the best title using the process-wide rules
pub fn get_best_title(path: impl AsRef<Path>, text: &str) -> TitleCandidate {
    TitleScorer::new(RuleConfig::global()).best_title(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer_title(path: &str, text: &str) -> TitleCandidate {
        let rules = RuleConfig::default();
        TitleScorer::new(&rules).best_title(path, text)
    }

    #[test]
    fn test_split_lines_variants() {
        assert_eq!(split_lines("a\r\nb\nc\rd", 10), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("  a  \n\n b", 10), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\nb\nc", 2), vec!["a", "b"]);
        assert!(split_lines("", 10).is_empty());
        assert_eq!(split_lines("a\n", 10), vec!["a"]);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("/tmp/photo_2024.jpg")), "photo_2024");
        assert_eq!(file_stem(Path::new("报告（终稿）.docx")), "报告(终稿)");
        assert_eq!(file_stem(Path::new("")), "");
    }

    #[test]
    fn test_cjk_report_title() {
        let title = scorer_title("doc1.txt", "年度工作报告\n\n本报告总结了...");

        assert_eq!(title.text, "年度工作报告");
        assert_eq!(title.source_line, Some(0));
        assert!(title.is_confident);
        // 1.0 position + 0.35 keyword
        assert!((title.weight - 1.35).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_falls_back_to_stem() {
        let title = scorer_title("/photos/photo_2024.jpg", "");

        assert_eq!(title.text, "photo_2024");
        assert_eq!(title.confidence, 1.0);
        assert!(title.is_confident);
        assert_eq!(title.source_line_index(), -1);
        assert_eq!(title.weight, 0.0);
    }

    #[test]
    fn test_whitespace_only_text_falls_back_to_stem() {
        let title = scorer_title("notes.txt", " \n\t\n   \r\n");
        assert_eq!(title.text, "notes");
        assert!(title.is_from_file_name());
    }

    #[test]
    fn test_blank_lines_count_toward_index() {
        let title = scorer_title("x.txt", "\n\nProject Plan Overview");
        assert_eq!(title.source_line, Some(2));
    }

    #[test]
    fn test_stopword_line_loses() {
        let text = "Contents\nProject Proposal Draft\nsome body text goes here.";
        let title = scorer_title("x.txt", text);
        assert_eq!(title.text, "Project Proposal Draft");
    }

    #[test]
    fn test_ties_pick_first_line() {
        let rules = RuleConfig::default();
        let scorer = TitleScorer::new(&rules);
        // Lines 2 and 3 share the same position weight and features
        let title = scorer.best_title("x.txt", "\nabcdefgh\nabcdefgh");
        assert_eq!(title.source_line, Some(1));
    }

    #[test]
    fn test_confidence_relative_to_mean() {
        let title = scorer_title("x.txt", "Annual Summary\nplain words here\nmore plain words");
        let rules = RuleConfig::default();
        let scorer = TitleScorer::new(&rules);
        let weights = [
            scorer.line_weight("Annual Summary", 0, "x"),
            scorer.line_weight("plain words here", 1, "x"),
            scorer.line_weight("more plain words", 2, "x"),
        ];
        let mean = weights.iter().sum::<f64>() / 3.0;

        assert!((title.confidence - weights[0] / mean).abs() < 1e-9);
        assert!(title.confidence >= 1.0);
    }

    #[test]
    fn test_non_positive_mean_gives_full_confidence() {
        let rules = RuleConfig::default();
        let scorer = TitleScorer::new(&rules);
        // A single line with a strongly negative weight
        let line = "参考文献 1234567890123456789012345678901234567890123456789012345678901234567890.";
        let title = scorer.best_title("x.txt", line);

        assert!(title.weight < 0.0);
        assert_eq!(title.confidence, 1.0);
        assert!(title.is_confident);
    }

    #[test]
    fn test_max_candidate_lines_respected() {
        let mut rules = RuleConfig::default();
        rules.max_candidate_lines = 2;
        let title = TitleScorer::new(&rules).best_title("x.txt", "\n\nReal Title Here");
        assert!(title.is_from_file_name());
    }

    #[test]
    fn test_length_boundary_weights() {
        let rules = RuleConfig::default();
        let scorer = TitleScorer::new(&rules);
        let at_max = "a".repeat(40);
        let past_max = "a".repeat(41);

        let w_at = scorer.line_weight(&at_max, 5, "zz");
        let w_past = scorer.line_weight(&past_max, 5, "zz");

        assert!((w_at - 0.4).abs() < 1e-12);
        assert!((w_at - w_past - 0.30 / 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_over_odd_unicode() {
        let text = "\u{0}\u{200b}\u{feff}🦀🦀\n\u{10ffff}x\n\r\r\n";
        let title = scorer_title("🦀.txt", text);
        assert!(title.confidence.is_finite());
    }
}
