//! Error types
//!
//! The inference core itself never fails; these errors only surface from the
//! explicit loading entry points ([`RuleConfig::from_file`] and
//! [`read_text`]). The lenient loaders catch them and fall back to defaults.
//!
//! [`RuleConfig::from_file`]: crate::rules::RuleConfig::from_file
//! [`read_text`]: crate::extract::read_text

use std::path::PathBuf;

use thiserror::Error;

use crate::extract::DocumentKind;

/// Failure to read or parse a rule file
#[derive(Debug, Error)]
pub enum RuleLoadError {
    #[error("failed to read rule file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to obtain a plain-text body for a document
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported file type: {0}")]
    Unsupported(String),

    #[error("{kind:?} documents need an external text extractor: {path}")]
    NeedsExternal { kind: DocumentKind, path: PathBuf },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
