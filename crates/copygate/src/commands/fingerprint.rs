//! Fingerprint command — print the content digest of a file.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use copygate_core::{fingerprint, text};

use super::read_input_file;

/// Arguments for the `fingerprint` subcommand.
#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// File to fingerprint (markup is stripped first).
    pub file: Utf8PathBuf,
}

/// Print the content fingerprint of a file.
#[instrument(name = "cmd_fingerprint", skip_all, fields(file = %args.file))]
pub fn cmd_fingerprint(
    args: FingerprintArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing fingerprint command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let normalized = text::normalize(&content);
    let digest = fingerprint::fingerprint(&normalized.plain_text);

    if global_json {
        println!("{}", serde_json::json!({ "fingerprint": digest }));
    } else {
        println!("{digest}");
    }

    Ok(())
}
