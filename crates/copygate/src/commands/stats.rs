//! Stats command — text statistics without a corpus lookup.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use copygate_core::{stats, text};

use super::read_input_file;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Keyword to measure density against.
    #[arg(short, long)]
    pub keyword: Option<String>,
}

#[derive(Serialize)]
struct StatsReport {
    word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword_density: Option<f64>,
    readability_score: i32,
}

/// Show word count, keyword density, and readability for a file.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, keyword = ?args.keyword, "executing stats command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let normalized = text::normalize(&content);

    let report = StatsReport {
        word_count: normalized.words.len(),
        keyword_density: args
            .keyword
            .as_deref()
            .map(|k| stats::keyword_density(&normalized.plain_text, k)),
        readability_score: stats::readability(&normalized.plain_text),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!("  {} {}", "Words:".cyan(), report.word_count);
    if let Some(density) = report.keyword_density {
        println!("  {} {density:.1}%", "Keyword density:".cyan());
    }
    println!("  {} {}/100", "Readability:".cyan(), report.readability_score);

    Ok(())
}
