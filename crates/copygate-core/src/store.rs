//! Corpus store boundary.
//!
//! The engine reads previously published articles through [`CorpusStore`] and
//! never writes back; persisting an accepted article (with its fingerprint)
//! is the publishing pipeline's job. Any backend that can answer the two
//! queries satisfies the contract: SQL full-text search, an inverted index,
//! or the bundled [`MemoryCorpus`].

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Cap on exact-fingerprint query results.
pub const FINGERPRINT_RESULT_LIMIT: usize = 5;

/// Cap on approximate-text query results.
pub const TEXT_RESULT_LIMIT: usize = 10;

/// A previously published article as stored in the corpus.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CorpusEntry {
    /// Stable corpus identifier.
    pub id: String,
    /// URL slug.
    pub slug: String,
    /// Article title.
    pub title: String,
    /// Article body (may contain markup).
    pub content: String,
    /// Digest of the stored content. Entries published before fingerprinting
    /// lack this field and are only reachable through text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_fingerprint: Option<String>,
}

/// Read-only queries against the published-article corpus.
pub trait CorpusStore {
    /// Entries whose stored fingerprint equals `fingerprint`.
    ///
    /// At most [`FINGERPRINT_RESULT_LIMIT`] results.
    fn find_by_fingerprint(&self, fingerprint: &str) -> StoreResult<Vec<CorpusEntry>>;

    /// Entries whose title or content contains either prefix, case-insensitively.
    ///
    /// Intentionally loose: recall matters more than precision here, and the
    /// similarity scorer filters false positives afterwards. At most
    /// [`TEXT_RESULT_LIMIT`] results.
    fn find_by_approximate_text(
        &self,
        title_prefix: &str,
        content_prefix: &str,
    ) -> StoreResult<Vec<CorpusEntry>>;
}

/// In-memory corpus backed by a plain `Vec`.
///
/// Serves the CLI (loaded from a JSON file), the HTTP wrapper, and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    entries: Vec<CorpusEntry>,
}

impl MemoryCorpus {
    /// Create a corpus from a list of entries.
    pub const fn new(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    /// Load a corpus from a JSON file containing an array of entries.
    pub fn from_json_file(path: &Utf8Path) -> StoreResult<Self> {
        let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            StoreError::File {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let entries = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { entries })
    }

    /// Number of entries in the corpus.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CorpusStore for MemoryCorpus {
    fn find_by_fingerprint(&self, fingerprint: &str) -> StoreResult<Vec<CorpusEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.content_fingerprint.as_deref() == Some(fingerprint))
            .take(FINGERPRINT_RESULT_LIMIT)
            .cloned()
            .collect())
    }

    fn find_by_approximate_text(
        &self,
        title_prefix: &str,
        content_prefix: &str,
    ) -> StoreResult<Vec<CorpusEntry>> {
        // An empty needle would substring-match every entry; skip it.
        let needles: Vec<String> = [title_prefix, content_prefix]
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.to_lowercase())
            .collect();
        if needles.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .entries
            .iter()
            .filter(|e| {
                let title = e.title.to_lowercase();
                let content = e.content.to_lowercase();
                needles
                    .iter()
                    .any(|n| title.contains(n) || content.contains(n))
            })
            .take(TEXT_RESULT_LIMIT)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(id: &str, title: &str, content: &str, fp: Option<&str>) -> CorpusEntry {
        CorpusEntry {
            id: id.to_string(),
            slug: format!("{id}-slug"),
            title: title.to_string(),
            content: content.to_string(),
            content_fingerprint: fp.map(str::to_string),
        }
    }

    #[test]
    fn fingerprint_lookup_exact_match_only() {
        let corpus = MemoryCorpus::new(vec![
            entry("1", "One", "body", Some("abc")),
            entry("2", "Two", "body", Some("def")),
        ]);
        let hits = corpus.find_by_fingerprint("abc").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn entries_without_fingerprint_never_match_fast_path() {
        let corpus = MemoryCorpus::new(vec![entry("1", "Old", "legacy body", None)]);
        assert!(corpus.find_by_fingerprint("anything").unwrap().is_empty());
    }

    #[test]
    fn fingerprint_results_capped() {
        let entries: Vec<CorpusEntry> = (0..8)
            .map(|i| entry(&i.to_string(), "T", "c", Some("same")))
            .collect();
        let corpus = MemoryCorpus::new(entries);
        let hits = corpus.find_by_fingerprint("same").unwrap();
        assert_eq!(hits.len(), FINGERPRINT_RESULT_LIMIT);
    }

    #[test]
    fn text_search_matches_title_or_content() {
        let corpus = MemoryCorpus::new(vec![
            entry("1", "Ocean Coloring Fun", "pages for kids", None),
            entry("2", "Dinosaur Facts", "the ocean coloring trend", None),
            entry("3", "Unrelated", "nothing here", None),
        ]);
        let hits = corpus.find_by_approximate_text("ocean coloring", "").unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn text_search_is_case_insensitive() {
        let corpus = MemoryCorpus::new(vec![entry("1", "OCEAN FUN", "BODY", None)]);
        let hits = corpus.find_by_approximate_text("ocean", "").unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn empty_prefixes_match_nothing() {
        let corpus = MemoryCorpus::new(vec![entry("1", "Title", "content", None)]);
        assert!(corpus.find_by_approximate_text("", "  ").unwrap().is_empty());
    }

    #[test]
    fn text_results_capped() {
        let entries: Vec<CorpusEntry> = (0..15)
            .map(|i| entry(&i.to_string(), "shared title", "c", None))
            .collect();
        let corpus = MemoryCorpus::new(entries);
        let hits = corpus.find_by_approximate_text("shared", "").unwrap();
        assert_eq!(hits.len(), TEXT_RESULT_LIMIT);
    }

    #[test]
    fn load_from_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corpus.json");
        fs::write(
            &path,
            r#"[{"id":"1","slug":"a","title":"A","content":"body text"}]"#,
        )
        .unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();
        let corpus = MemoryCorpus::from_json_file(&path).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn load_missing_file_errors() {
        let result = MemoryCorpus::from_json_file(Utf8Path::new("/nonexistent/corpus.json"));
        assert!(matches!(result, Err(StoreError::File { .. })));
    }

    #[test]
    fn load_invalid_json_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corpus.json");
        fs::write(&path, "not json").unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();
        let result = MemoryCorpus::from_json_file(&path);
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }
}
