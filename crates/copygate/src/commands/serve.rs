//! Serve command — run the HTTP analysis API.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, info, instrument};

use copygate_core::{Config, MemoryCorpus};

use crate::server::{self, AppState};

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1:8787")]
    pub addr: String,

    /// JSON corpus of previously published articles.
    #[arg(long)]
    pub corpus: Option<Utf8PathBuf>,
}

/// Serve `POST /analyze` and `GET /health` until interrupted.
#[instrument(name = "cmd_serve", skip_all, fields(addr = %args.addr))]
pub async fn cmd_serve(
    args: ServeArgs,
    config: Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let corpus_path = args.corpus.as_deref().or(config.corpus.as_deref());
    let corpus = match corpus_path {
        Some(path) => MemoryCorpus::from_json_file(path)
            .with_context(|| format!("failed to load corpus from {path}"))?,
        None => MemoryCorpus::default(),
    };
    debug!(entries = corpus.len(), "corpus ready");

    let state = AppState::new(corpus, config.thresholds, max_input_bytes);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;
    info!(addr = %args.addr, "serving analysis API");

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")
}
