//! Script-run tokenizer
//!
//! Splits text into two kinds of tokens without any morphological analysis:
//! maximal runs of CJK ideographs (kept verbatim) and maximal runs of ASCII
//! word characters (lower-cased). Everything else separates tokens.
//!
//! The default [`TokenOrder::ScriptPasses`] emits every CJK run first and then
//! every word run, which is what existing rankings were computed with.
//! [`TokenOrder::Positional`] emits tokens in text order instead.

use crate::types::{Token, TokenClass};

/// Check whether a character belongs to the CJK unified ideograph range
/// used for run detection (U+4E00..=U+9FA5)
#[inline]
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Check whether a character is an ASCII word character
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn classify(c: char) -> Option<TokenClass> {
    if is_cjk(c) {
        Some(TokenClass::Cjk)
    } else if is_word_char(c) {
        Some(TokenClass::Word)
    } else {
        None
    }
}

fn make_token(run: &str, class: TokenClass) -> Token {
    match class {
        TokenClass::Cjk => Token::new(run, class),
        TokenClass::Word => Token::new(run.to_ascii_lowercase(), class),
    }
}

/// Ordering of tokens across the two script classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenOrder {
    /// All CJK runs in text order, followed by all word runs in text order
    #[default]
    ScriptPasses,
    /// Runs of both classes interleaved in text order
    Positional,
}

/// Iterator over maximal runs of a single class (or of any class when
/// `only` is `None`)
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    text: &'a str,
    pos: usize,
    only: Option<TokenClass>,
}

impl<'a> Runs<'a> {
    fn new(text: &'a str, only: Option<TokenClass>) -> Self {
        Self { text, pos: 0, only }
    }

    fn accepts(&self, class: Option<TokenClass>) -> Option<TokenClass> {
        match (class, self.only) {
            (Some(c), Some(only)) if c == only => Some(c),
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();

        // Skip to the first accepted character
        let (start, class) = loop {
            let (i, c) = chars.next()?;
            if let Some(class) = self.accepts(classify(c)) {
                break (i, class);
            }
        };

        let mut end = rest.len();
        for (i, c) in chars {
            if classify(c) != Some(class) {
                end = i;
                break;
            }
        }

        self.pos += end;
        Some(make_token(&rest[start..end], class))
    }
}

/// Stateless tokenizer; every call to [`Tokenizer::tokens`] starts a fresh
/// pass over the text
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    order: TokenOrder,
}

impl Tokenizer {
    /// Create a tokenizer with the default two-pass ordering
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cross-script token order
    pub fn with_order(mut self, order: TokenOrder) -> Self {
        self.order = order;
        self
    }

    /// Lazily tokenize `text`
    pub fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = Token> + 'a> {
        match self.order {
            TokenOrder::ScriptPasses => Box::new(
                Runs::new(text, Some(TokenClass::Cjk))
                    .chain(Runs::new(text, Some(TokenClass::Word))),
            ),
            TokenOrder::Positional => Box::new(Runs::new(text, None)),
        }
    }

    /// Tokenize `text` into a vector
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokens(text).collect()
    }
}

/// Tokenize with the default ordering
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(text)
}
