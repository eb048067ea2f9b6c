//! Analyze command — uniqueness and SEO verdict for one article.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use copygate_core::{Config, ContentAnalyzer, MemoryCorpus};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Article file to analyze (markup allowed).
    pub file: Utf8PathBuf,

    /// Primary keyword to measure density against.
    #[arg(short, long)]
    pub keyword: String,

    /// Article title. Defaults to the file stem.
    #[arg(long)]
    pub title: Option<String>,

    /// JSON corpus of previously published articles.
    #[arg(long)]
    pub corpus: Option<Utf8PathBuf>,

    /// Minimum acceptable SEO score (0–100).
    #[arg(long)]
    pub min_seo: Option<i32>,
}

/// Run the full analysis pipeline on a file and gate on the verdict.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, keyword = %args.keyword, corpus = ?args.corpus, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| args.file.file_stem().unwrap_or("untitled").to_string());

    let corpus_path = args.corpus.as_deref().or(config.corpus.as_deref());
    let corpus = load_corpus(corpus_path)?;

    let analyzer = ContentAnalyzer::new(&corpus, config.thresholds.clone());
    let result = analyzer.analyze(&title, &content, &args.keyword);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    // Text output — section by section
    println!("{}", args.file.bold());

    println!(
        "\n  {} {}/100{}",
        "Uniqueness:".cyan(),
        result.uniqueness_score,
        if result.is_duplicate {
            format!(" {}", "DUPLICATE".red().bold())
        } else {
            String::new()
        },
    );
    for m in &result.similar_matches {
        println!("    {:.0}%  {} ({})", m.score * 100.0, m.title, m.slug.dimmed());
    }

    println!(
        "\n  {} {} words, keyword density {:.1}%, readability {}/100",
        "Statistics:".cyan(),
        result.word_count,
        result.keyword_density,
        result.readability_score,
    );

    if !result.recommendations.is_empty() {
        println!("\n  {}", "Recommendations:".yellow());
        for rec in &result.recommendations {
            println!("    - {rec}");
        }
    }

    let score_str = if result.seo_score >= 80 {
        format!("{}", result.seo_score).green().to_string()
    } else if result.seo_score >= 60 {
        format!("{}", result.seo_score).yellow().to_string()
    } else {
        format!("{}", result.seo_score).red().to_string()
    };
    println!("\n  {} {score_str}/100", "SEO score:".cyan());

    // Quality gates
    if result.is_duplicate {
        bail!(
            "{} is too similar to existing content ({} match(es) above the duplicate threshold).",
            args.file,
            result.similar_matches.len(),
        );
    }
    if let Some(min) = args.min_seo.or(config.min_seo_score)
        && result.seo_score < min
    {
        bail!(
            "{} SEO score {} is below minimum {} — address the recommendations above.",
            args.file,
            result.seo_score,
            min,
        );
    }

    Ok(())
}

/// Load the corpus file, or fall back to an empty corpus.
fn load_corpus(path: Option<&Utf8Path>) -> anyhow::Result<MemoryCorpus> {
    match path {
        Some(path) => {
            let corpus = MemoryCorpus::from_json_file(path)
                .with_context(|| format!("failed to load corpus from {path}"))?;
            debug!(entries = corpus.len(), corpus = %path, "corpus loaded");
            Ok(corpus)
        }
        None => {
            debug!("no corpus configured, analyzing against an empty corpus");
            Ok(MemoryCorpus::default())
        }
    }
}
