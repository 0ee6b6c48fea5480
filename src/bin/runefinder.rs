//! Runefinder CLI - find Unicode characters by name.
//!
//! ```text
//! $ runefinder cat smiling
//! U+1F638	😸	GRINNING CAT FACE WITH SMILING EYES
//! U+1F63A	😺	SMILING CAT FACE WITH OPEN MOUTH
//! U+1F63B	😻	SMILING CAT FACE WITH HEART-SHAPED EYES
//! ```
//!
//! Results go to stdout; logs go to stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use runefinder::{Query, RunefinderConfig};
use tracing_subscriber::EnvFilter;

/// Find Unicode characters whose names contain all the given words.
#[derive(Debug, Parser)]
#[command(name = "runefinder", version, about)]
struct Cli {
    /// Words to look for (case-insensitive), e.g. `cat smiling`
    #[arg(required = true, value_name = "WORD")]
    words: Vec<String>,

    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Location of UnicodeData.txt; overrides UCD_PATH and the config file
    #[arg(long, value_name = "FILE")]
    ucd_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    check_words(&cli.words)?;

    let config = load_config(&cli)?;
    init_tracing(&config.log_level);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let hits = runefinder::find(&config, cli.words.as_slice(), &mut out)
        .with_context(|| format!("looking up {:?}", cli.words.join(" ")))?;
    out.flush().context("writing results")?;

    tracing::debug!(hits, "lookup complete");
    Ok(())
}

/// Rejects arguments that contain no word characters at all, such as `-`.
///
/// They would fold to an empty query, which matches every entry.
fn check_words(words: &[String]) -> anyhow::Result<()> {
    if Query::new(words).is_empty() {
        anyhow::bail!("no searchable words in {:?}", words.join(" "));
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<RunefinderConfig> {
    let config = match &cli.config {
        Some(path) => RunefinderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunefinderConfig::default(),
    };
    let mut config = config.with_env_overrides()?;

    if let Some(path) = &cli.ucd_path {
        config.cache.ucd_path = Some(path.clone());
    }
    Ok(config)
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
