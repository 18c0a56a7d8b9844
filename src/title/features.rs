//! Line features used by the title scorer
//!
//! Each function maps a line to a value in `[0, 1]` (the length penalty can
//! exceed 1 for very long lines). All of them are total over arbitrary
//! Unicode input; lengths are counted in characters.

use rustc_hash::FxHashSet;

use crate::rules::{IdealLength, TitleKeywords};

/// Replace full-width brackets with their ASCII forms and trim
pub fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '（' => '(',
            '）' => ')',
            '【' => '[',
            '】' => ']',
            other => other,
        })
        .collect()
}

/// Normalize a raw line: tabs become spaces, space runs collapse to one
pub fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last_space = false;
    for c in line.trim().chars() {
        let c = if c == '\t' { ' ' } else { c };
        if c == ' ' {
            if last_space {
                continue;
            }
            last_space = true;
        } else {
            last_space = false;
        }
        out.push(c);
    }
    normalize(&out)
}

/// Fraction of alphabetic characters that are uppercase
pub fn uppercase_ratio(line: &str) -> f64 {
    let (letters, upper) = line
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(l, u), c| (l + 1, u + c.is_uppercase() as usize));
    if letters == 0 {
        return 0.0;
    }
    upper as f64 / letters as f64
}

/// 1.0 if the line contains any title keyword
pub fn keyword_hit(line: &str, keywords: &TitleKeywords) -> f64 {
    if keywords.zh.iter().any(|k| !k.is_empty() && line.contains(k.as_str())) {
        return 1.0;
    }
    let lower = line.to_lowercase();
    if keywords
        .en
        .iter()
        .any(|k| !k.is_empty() && lower.contains(&k.to_lowercase()))
    {
        return 1.0;
    }
    0.0
}

/// Keep only letters, digits and whitespace
fn strip_non_word(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

fn word_set(s: &str) -> FxHashSet<&str> {
    s.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .collect()
}

/// Similarity between a line and the file stem
///
/// 1.0 when one stripped, lower-cased side contains the other, otherwise the
/// Jaccard index of their word sets.
pub fn filename_similarity(line: &str, stem: &str) -> f64 {
    let l = strip_non_word(line).to_lowercase();
    let s = strip_non_word(stem).to_lowercase();
    if l.trim().is_empty() || s.trim().is_empty() {
        return 0.0;
    }

    if s.contains(&l) || l.contains(&s) {
        return 1.0;
    }

    let lw = word_set(&l);
    let sw = word_set(&s);
    if lw.is_empty() || sw.is_empty() {
        return 0.0;
    }

    let inter = lw.intersection(&sw).count();
    let union = lw.union(&sw).count();
    if union == 0 {
        0.0
    } else {
        inter as f64 / union as f64
    }
}

/// Normalized distance from the ideal length range
pub fn length_penalty(len: usize, ideal: IdealLength) -> f64 {
    if len == 0 {
        return 1.0;
    }
    if len < ideal.min {
        return (ideal.min - len) as f64 / ideal.min as f64;
    }
    if len > ideal.max {
        return (len - ideal.max) as f64 / ideal.max as f64;
    }
    0.0
}

/// First code point of each common block of ten decimal digits (ASCII,
/// Arabic-Indic, Indic scripts, Thai, Lao, Tibetan, Myanmar, Khmer,
/// Mongolian, full-width)
const DECIMAL_ZEROS: [u32; 20] = [
    0x30, 0x660, 0x6F0, 0x7C0, 0x966, 0x9E6, 0xA66, 0xAE6, 0xB66, 0xBE6, 0xC66, 0xCE6, 0xD66,
    0xE50, 0xED0, 0xF20, 0x1040, 0x17E0, 0x1810, 0xFF10,
];

/// Decimal digit test; circled numbers, roman numerals, fractions and `〇`
/// are not digits
fn is_decimal_digit(c: char) -> bool {
    let cp = c as u32;
    DECIMAL_ZEROS.iter().any(|&zero| (zero..zero + 10).contains(&cp))
}

/// Fraction of characters that are decimal digits
pub fn digit_ratio(line: &str) -> f64 {
    let (total, digits) = line
        .chars()
        .fold((0usize, 0usize), |(t, d), c| (t + 1, d + is_decimal_digit(c) as usize));
    digits as f64 / total.max(1) as f64
}

/// 1.0 if the line contains any configured punctuation mark
pub fn punctuation_hit(line: &str, punctuation: &[String]) -> f64 {
    if punctuation
        .iter()
        .any(|p| !p.is_empty() && line.contains(p.as_str()))
    {
        1.0
    } else {
        0.0
    }
}

/// 1.0 if the line equals or contains any stopword, ignoring case
pub fn stopword_hit(line: &str, stopwords: &[String]) -> f64 {
    let lower = line.to_lowercase();
    if stopwords
        .iter()
        .any(|s| !s.is_empty() && lower.contains(&s.to_lowercase()))
    {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleConfig;

    #[test]
    fn test_normalize_brackets() {
        assert_eq!(normalize("  （附件）【草案】 "), "(附件)[草案]");
    }

    #[test]
    fn test_normalize_line_collapses_spaces() {
        assert_eq!(normalize_line("\tQuarterly\t\tReport    2024 "), "Quarterly Report 2024");
    }

    #[test]
    fn test_uppercase_ratio() {
        assert_eq!(uppercase_ratio("ABCD"), 1.0);
        assert_eq!(uppercase_ratio("AbCd"), 0.5);
        assert_eq!(uppercase_ratio("1234 !"), 0.0);
        // CJK ideographs are letters without case
        assert_eq!(uppercase_ratio("报告A"), 1.0 / 3.0);
    }

    #[test]
    fn test_keyword_hit() {
        let kw = RuleConfig::default().keywords;
        assert_eq!(keyword_hit("年度工作报告", &kw), 1.0);
        assert_eq!(keyword_hit("annual REPORT", &kw), 1.0);
        assert_eq!(keyword_hit("meeting notes", &kw), 0.0);
    }

    #[test]
    fn test_filename_similarity() {
        assert_eq!(filename_similarity("Quarterly Report", "quarterly_report"), 0.0);
        assert_eq!(filename_similarity("Budget", "budget-2024"), 1.0);
        assert_eq!(filename_similarity("", "doc1"), 0.0);
        assert_eq!(filename_similarity("!!!", "doc1"), 0.0);
        // {alpha, beta} vs {beta, gamma}
        assert!((filename_similarity("alpha beta", "beta gamma") - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_length_penalty_boundaries() {
        let ideal = IdealLength { min: 6, max: 40 };
        assert_eq!(length_penalty(0, ideal), 1.0);
        assert_eq!(length_penalty(3, ideal), 0.5);
        assert_eq!(length_penalty(6, ideal), 0.0);
        assert_eq!(length_penalty(40, ideal), 0.0);
        assert!((length_penalty(41, ideal) - 1.0 / 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_digit_ratio() {
        assert_eq!(digit_ratio(""), 0.0);
        assert_eq!(digit_ratio("ab12"), 0.5);
        assert_eq!(digit_ratio("２０２４"), 1.0);
        assert_eq!(digit_ratio("٣٤"), 1.0);
    }

    #[test]
    fn test_digit_ratio_ignores_other_numerics() {
        assert_eq!(digit_ratio("①Ⅳ½〇"), 0.0);
        assert_eq!(digit_ratio("第Ⅳ章1"), 0.25);
    }

    #[test]
    fn test_punctuation_and_stopwords() {
        let rules = RuleConfig::default();
        assert_eq!(punctuation_hit("Hello, world", &rules.punctuation), 1.0);
        assert_eq!(punctuation_hit("你好。", &rules.punctuation), 1.0);
        assert_eq!(punctuation_hit("Plain title", &rules.punctuation), 0.0);
        assert_eq!(stopword_hit("Table of Contents", &rules.stopwords), 1.0);
        assert_eq!(stopword_hit("目录", &rules.stopwords), 1.0);
        assert_eq!(stopword_hit("Project plan", &rules.stopwords), 0.0);
    }
}
