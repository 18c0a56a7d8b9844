//! Filename candidate assembly
//!
//! Turns a title stem and ranked keywords into at most [`MAX_CANDIDATES`]
//! distinct, filesystem-safe names, in generation order.

use rustc_hash::FxHashSet;

use crate::types::Keyword;

/// Characters that are illegal in file names on common filesystems
pub const ILLEGAL_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Name used when sanitizing leaves nothing
pub const PLACEHOLDER: &str = "untitled";

/// Maximum candidate length, in characters
pub const MAX_NAME_CHARS: usize = 60;

/// Maximum number of candidates returned
pub const MAX_CANDIDATES: usize = 5;

fn is_trailing_junk(c: char) -> bool {
    c == '.' || c.is_whitespace()
}

/// Make `name` safe to use as a file stem
///
/// Removes illegal characters, trims surrounding whitespace and trailing
/// dots, substitutes [`PLACEHOLDER`] for an empty result and truncates to
/// [`MAX_NAME_CHARS`] characters. Applying it twice changes nothing.
pub fn sanitize(name: &str) -> String {
    let filtered: String = name.chars().filter(|c| !ILLEGAL_CHARS.contains(c)).collect();
    let trimmed = filtered.trim_start().trim_end_matches(is_trailing_junk);
    if trimmed.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let Some((cut, _)) = trimmed.char_indices().nth(MAX_NAME_CHARS) else {
        return trimmed.to_string();
    };
    match trimmed[..cut].trim_end_matches(is_trailing_junk) {
        "" => PLACEHOLDER.to_string(),
        truncated => truncated.to_string(),
    }
}

/// Build ordered filename candidates from a title stem and keywords
///
/// Generation order:
/// 1. the title stem
/// 2. top-3 keywords joined with a space
/// 3. top-3 keywords joined with `_`
/// 4. top-4 keywords joined with a space
/// 5. the title stem followed by the top-2 keywords
///
/// Only keywords of at least two characters are used; entries that would
/// need a missing title or keywords are skipped.
pub fn build_candidates(title_stem: &str, keywords: &[Keyword]) -> Vec<String> {
    let usable: Vec<&str> = keywords
        .iter()
        .map(|k| k.token.as_str())
        .filter(|t| t.chars().count() >= 2)
        .collect();
    let top = |n: usize| &usable[..usable.len().min(n)];
    let has_title = !title_stem.trim().is_empty();
    let has_keywords = !usable.is_empty();

    let mut raw = Vec::with_capacity(5);
    if has_title {
        raw.push(title_stem.to_string());
    }
    if has_keywords {
        raw.push(top(3).join(" "));
        raw.push(top(3).join("_"));
        raw.push(top(4).join(" "));
        if has_title {
            raw.push(format!("{} {}", title_stem, top(2).join(" ")));
        }
    }

    let mut seen = FxHashSet::default();
    raw.iter()
        .map(|name| sanitize(name))
        .filter(|name| seen.insert(name.clone()))
        .take(MAX_CANDIDATES)
        .collect()
}
