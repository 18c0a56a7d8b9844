use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rapid_rename::extract::{read_text, DEFAULT_MAX_CHARS};
use rapid_rename::{KeywordConfig, RuleConfig, StopwordFilter, Suggester, TokenOrder};
use tracing_subscriber::EnvFilter;

/// Suggest new file names for a document from its text
#[derive(Parser, Debug)]
#[command(name = "rapid-rename", version, about)]
struct Cli {
    /// Document to name
    path: PathBuf,

    /// Read the body from this file instead (text extracted by another tool)
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Rule file to use instead of the well-known locations
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Cap on body length, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_CHARS)]
    max_chars: usize,

    /// Number of keywords to rank
    #[arg(long, default_value_t = 20)]
    top_n: usize,

    /// Co-occurrence window size
    #[arg(long, default_value_t = 4)]
    window: usize,

    /// Order tokens by text position instead of script passes
    #[arg(long)]
    positional: bool,

    /// Drop stopwords of these languages from keywords (e.g. "en" or "en+zh")
    #[arg(long)]
    stopwords: Option<String>,

    /// Print the full suggestion as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rules = match &cli.rules {
        Some(path) => RuleConfig::from_file(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => RuleConfig::load(),
    };

    let source = cli.text_file.as_ref().unwrap_or(&cli.path);
    let text = read_text(source, cli.max_chars)
        .with_context(|| format!("reading text of {}", source.display()))?;

    let mut config = KeywordConfig::default()
        .with_top_n(cli.top_n)
        .with_window(cli.window);
    if cli.positional {
        config = config.with_order(TokenOrder::Positional);
    }
    if let Some(langs) = &cli.stopwords {
        config = config.with_stopwords(StopwordFilter::new(langs));
    }

    let suggestion = Suggester::new(&rules)
        .with_keyword_config(config)
        .with_max_chars(cli.max_chars)
        .suggest(&cli.path, &text);

    if cli.json {
        let json = serde_json::to_string_pretty(&suggestion)?;
        println!("{json}");
        return Ok(());
    }

    let marker = if suggestion.title.is_confident { "" } else { " (low confidence)" };
    println!(
        "title: {} [{:.2}]{}",
        suggestion.title.text, suggestion.title.confidence, marker
    );
    for (i, name) in suggestion.candidates.iter().enumerate() {
        println!("[{}] {}", i + 1, name);
    }

    Ok(())
}
