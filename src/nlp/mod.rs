//! Natural Language Processing components
//!
//! This module provides tokenization and stopword filtering.

pub mod stopwords;
pub mod tokenizer;
