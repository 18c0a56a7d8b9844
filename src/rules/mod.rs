//! Title scoring rules
//!
//! [`RuleConfig`] carries every tunable of the title scorer. It is built from
//! embedded defaults, optionally overridden field by field from a JSON rule
//! file, and never changes afterwards.
//!
//! Callers normally load it once and pass `&RuleConfig` down explicitly.
//! [`RuleConfig::global`] offers a process-wide instance for callers that
//! cannot thread a handle through.

pub mod spec;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::errors::RuleLoadError;
use spec::{IdealLengthSpec, KeywordsSpec, PositionWeightsSpec, RuleFile, WeightsSpec};

/// Environment variable naming an explicit rule file
pub const RULES_ENV_VAR: &str = "RAPID_RENAME_RULES";

/// Default rule file name
pub const RULES_FILE_NAME: &str = "title_rules.json";

/// Ideal title length range, in characters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealLength {
    pub min: usize,
    pub max: usize,
}

/// Base weight by line position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionWeights {
    pub line1: f64,
    pub line2_3: f64,
    pub line4_5: f64,
    pub others: f64,
}

impl PositionWeights {
    /// Weight for the line at zero-based `index`
    pub fn for_index(&self, index: usize) -> f64 {
        match index {
            0 => self.line1,
            1..=2 => self.line2_3,
            3..=4 => self.line4_5,
            _ => self.others,
        }
    }
}

/// Bonus and penalty weights applied to line features
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub position: PositionWeights,
    pub uppercase_bonus: f64,
    pub keyword_bonus: f64,
    pub filename_bonus: f64,
    pub length_penalty: f64,
    pub digit_penalty: f64,
    pub punctuation_penalty: f64,
    pub stopword_penalty: f64,
}

/// Keyword lists that mark title-like lines
#[derive(Debug, Clone, PartialEq)]
pub struct TitleKeywords {
    /// Matched case-sensitively
    pub zh: Vec<String>,
    /// Matched case-insensitively
    pub en: Vec<String>,
}

/// Immutable title scoring configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RuleConfig {
    pub version: u32,
    pub confidence_cutoff: f64,
    pub max_candidate_lines: usize,
    pub ideal_title_length: IdealLength,
    pub weights: Weights,
    pub stopwords: Vec<String>,
    pub keywords: TitleKeywords,
    pub punctuation: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            version: 1,
            confidence_cutoff: 0.6,
            max_candidate_lines: 20,
            ideal_title_length: IdealLength { min: 6, max: 40 },
            weights: Weights {
                position: PositionWeights {
                    line1: 1.0,
                    line2_3: 0.8,
                    line4_5: 0.6,
                    others: 0.4,
                },
                uppercase_bonus: 0.25,
                keyword_bonus: 0.35,
                filename_bonus: 0.35,
                length_penalty: 0.30,
                digit_penalty: 0.30,
                punctuation_penalty: 0.25,
                stopword_penalty: 0.50,
            },
            stopwords: strings(&[
                "目录", "索引", "声明", "致谢", "摘要", "附录", "参考文献",
                "contents", "index", "appendix", "acknowledgements", "abstract", "references",
            ]),
            keywords: TitleKeywords {
                zh: strings(&[
                    "方案", "说明", "报告", "通知", "计划", "规定", "指引", "总结", "手册", "合同",
                    "报价",
                ]),
                en: strings(&[
                    "Report", "Guideline", "Proposal", "Manual", "Contract", "Summary", "Plan",
                    "Specification", "Notice",
                ]),
            },
            punctuation: strings(&[
                ".", ",", ";", ":", "!", "?", "，", "。", "；", "：", "！", "？",
            ]),
        }
    }
}

// ─── Field-by-field merge helpers ───────────────────────────────────────────

fn pick_f64(current: f64, value: Option<f64>) -> f64 {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => current,
    }
}

fn pick_usize(current: usize, value: Option<usize>) -> usize {
    match value {
        Some(v) if v != 0 => v,
        _ => current,
    }
}

fn pick_list(current: &[String], value: Option<Vec<String>>) -> Vec<String> {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => current.to_vec(),
    }
}

impl PositionWeights {
    fn merged_with(&self, spec: Option<PositionWeightsSpec>) -> Self {
        let Some(spec) = spec else { return *self };
        Self {
            line1: pick_f64(self.line1, spec.line1),
            line2_3: pick_f64(self.line2_3, spec.line2_3),
            line4_5: pick_f64(self.line4_5, spec.line4_5),
            others: pick_f64(self.others, spec.others),
        }
    }
}

impl Weights {
    fn merged_with(&self, spec: Option<WeightsSpec>) -> Self {
        let Some(spec) = spec else { return *self };
        Self {
            position: self.position.merged_with(spec.position),
            uppercase_bonus: pick_f64(self.uppercase_bonus, spec.uppercase_bonus),
            keyword_bonus: pick_f64(self.keyword_bonus, spec.keyword_bonus),
            filename_bonus: pick_f64(self.filename_bonus, spec.filename_bonus),
            length_penalty: pick_f64(self.length_penalty, spec.length_penalty),
            digit_penalty: pick_f64(self.digit_penalty, spec.digit_penalty),
            punctuation_penalty: pick_f64(self.punctuation_penalty, spec.punctuation_penalty),
            stopword_penalty: pick_f64(self.stopword_penalty, spec.stopword_penalty),
        }
    }
}

impl IdealLength {
    fn merged_with(&self, spec: Option<IdealLengthSpec>) -> Self {
        let Some(spec) = spec else { return *self };
        Self {
            min: pick_usize(self.min, spec.min),
            max: pick_usize(self.max, spec.max),
        }
    }
}

impl TitleKeywords {
    fn merged_with(&self, spec: Option<KeywordsSpec>) -> Self {
        let Some(spec) = spec else { return self.clone() };
        Self {
            zh: pick_list(&self.zh, spec.zh),
            en: pick_list(&self.en, spec.en),
        }
    }
}

// ─── Loading ────────────────────────────────────────────────────────────────

impl RuleConfig {
    /// Overlay a parsed rule file on top of `self`
    ///
    /// Numbers override only when present and non-zero, lists only when
    /// present and non-empty.
    pub fn merged_with(&self, file: RuleFile) -> Self {
        Self {
            version: file.version.filter(|&v| v != 0).unwrap_or(self.version),
            confidence_cutoff: pick_f64(self.confidence_cutoff, file.confidence_cutoff),
            max_candidate_lines: pick_usize(self.max_candidate_lines, file.max_candidate_lines),
            ideal_title_length: self.ideal_title_length.merged_with(file.ideal_title_length),
            weights: self.weights.merged_with(file.weights),
            stopwords: pick_list(&self.stopwords, file.stopwords),
            keywords: self.keywords.merged_with(file.keywords),
            punctuation: pick_list(&self.punctuation, file.punctuation),
        }
    }

    /// Parse rule file contents and merge them over the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: RuleFile = serde_json::from_str(json)?;
        Ok(Self::default().merged_with(file))
    }

    /// Read a rule file and merge it over the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RuleLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RuleLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(json.trim_start_matches('\u{feff}')).map_err(|source| {
            RuleLoadError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Well-known rule file locations, in lookup order
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(explicit) = std::env::var_os(RULES_ENV_VAR) {
            paths.push(PathBuf::from(explicit));
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            paths.push(exe_dir.join(RULES_FILE_NAME));
            paths.push(exe_dir.join("config").join(RULES_FILE_NAME));
        }
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join("config").join(RULES_FILE_NAME));
        }

        paths
    }

    /// Load from the first existing path, falling back to defaults
    ///
    /// Read and parse failures are logged and otherwise ignored: a broken
    /// rule file yields the unmodified defaults.
    pub fn load_from<P: AsRef<Path>>(paths: &[P]) -> Self {
        let Some(path) = paths.iter().map(AsRef::as_ref).find(|p| p.is_file()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("no rule file found, using built-in rules");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(rules) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(path = %path.display(), "loaded title rules");
                rules
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "ignoring rule file, using built-in rules");
                Self::default()
            }
        }
    }

    /// Load from the well-known locations
    pub fn load() -> Self {
        Self::load_from(&Self::candidate_paths())
    }

    /// Process-wide rules, loaded on first use
    ///
    /// Concurrent first callers block until the single load finishes; every
    /// caller then sees the same immutable value.
    pub fn global() -> &'static RuleConfig {
        static RULES: OnceLock<RuleConfig> = OnceLock::new();
        RULES.get_or_init(Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let rules = RuleConfig::default();
        assert_eq!(rules.confidence_cutoff, 0.6);
        assert_eq!(rules.ideal_title_length, IdealLength { min: 6, max: 40 });
        assert_eq!(rules.weights.position.for_index(0), 1.0);
        assert_eq!(rules.weights.position.for_index(2), 0.8);
        assert_eq!(rules.weights.position.for_index(4), 0.6);
        assert_eq!(rules.weights.position.for_index(5), 0.4);
        assert!(rules.keywords.zh.contains(&"报告".to_string()));
        assert!(rules.stopwords.contains(&"references".to_string()));
    }

    #[test]
    fn test_merge_is_field_by_field() {
        let json = r#"{
            "confidenceCutoff": 0.9,
            "idealTitleLength": { "max": 50 },
            "weights": { "position": { "line1": 1.5 }, "digitPenalty": 0.1 },
            "keywords": { "en": ["Minutes"] }
        }"#;
        let rules = RuleConfig::from_json(json).unwrap();
        let defaults = RuleConfig::default();

        assert_eq!(rules.confidence_cutoff, 0.9);
        assert_eq!(rules.ideal_title_length, IdealLength { min: 6, max: 50 });
        assert_eq!(rules.weights.position.line1, 1.5);
        assert_eq!(rules.weights.position.line2_3, 0.8);
        assert_eq!(rules.weights.digit_penalty, 0.1);
        assert_eq!(rules.weights.keyword_bonus, defaults.weights.keyword_bonus);
        assert_eq!(rules.keywords.en, vec!["Minutes"]);
        assert_eq!(rules.keywords.zh, defaults.keywords.zh);
        assert_eq!(rules.stopwords, defaults.stopwords);
    }

    #[test]
    fn test_zero_and_empty_keep_defaults() {
        let json = r#"{
            "version": 0,
            "confidenceCutoff": 0,
            "maxCandidateLines": 0,
            "stopwords": [],
            "punctuation": []
        }"#;
        let rules = RuleConfig::from_json(json).unwrap();
        assert_eq!(rules, RuleConfig::default());
    }

    #[test]
    fn test_from_file_reads_and_merges() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "maxCandidateLines": 5 }}"#).unwrap();

        let rules = RuleConfig::from_file(file.path()).unwrap();
        assert_eq!(rules.max_candidate_lines, 5);
    }

    #[test]
    fn test_from_file_errors_are_typed() {
        let missing = RuleConfig::from_file("/nonexistent/title_rules.json");
        assert!(matches!(missing, Err(RuleLoadError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let broken = RuleConfig::from_file(file.path());
        assert!(matches!(broken, Err(RuleLoadError::Parse { .. })));
    }

    #[test]
    fn test_load_from_swallows_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();

        let rules = RuleConfig::load_from(&[file.path()]);
        assert_eq!(rules, RuleConfig::default());
    }

    #[test]
    fn test_load_from_uses_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        std::fs::write(&first, r#"{ "confidenceCutoff": 0.7 }"#).unwrap();
        std::fs::write(&second, r#"{ "confidenceCutoff": 0.8 }"#).unwrap();

        let missing = dir.path().join("missing.json");
        let rules = RuleConfig::load_from(&[missing, first, second]);
        assert_eq!(rules.confidence_cutoff, 0.7);
    }

    #[test]
    fn test_load_from_no_paths() {
        let rules = RuleConfig::load_from::<PathBuf>(&[]);
        assert_eq!(rules, RuleConfig::default());
    }

    #[test]
    fn test_global_is_shared_across_threads() {
        let addrs: Vec<usize> = (0..8)
            .map(|_| std::thread::spawn(|| RuleConfig::global() as *const RuleConfig as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
