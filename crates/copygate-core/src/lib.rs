//! Core library for copygate.
//!
//! Given a candidate article (title, body, target keyword), this crate
//! decides how original it is relative to a corpus of previously published
//! articles, measures SEO-relevant text statistics, and produces improvement
//! recommendations plus a composite quality score. It is consumed by the
//! `copygate` CLI and any publishing pipeline that links it directly.
//!
//! # Modules
//!
//! - [`analyzer`] - Pipeline orchestration; the `analyze` entry point
//! - [`text`] - Markup stripping and tokenization
//! - [`fingerprint`] - Fast-equality content digests
//! - [`store`] - The corpus store boundary and an in-memory implementation
//! - [`matcher`] - Candidate lookup with degrade-to-empty failure handling
//! - [`similarity`] - Jaccard scoring over significant-word sets
//! - [`stats`] - Word count, keyword density, readability
//! - [`recommend`] / [`seo`] - Recommendations and the composite score
//! - [`config`] - Configuration loading and engine thresholds
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use copygate_core::{ContentAnalyzer, MemoryCorpus, Thresholds};
//!
//! let corpus = MemoryCorpus::default();
//! let analyzer = ContentAnalyzer::new(&corpus, Thresholds::default());
//! let result = analyzer.analyze(
//!     "Ocean Coloring Fun",
//!     "<p>Dive into a sea of creative coloring ideas.</p>",
//!     "ocean coloring",
//! );
//! assert_eq!(result.uniqueness_score, 100);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;

pub mod config;

pub mod error;

pub mod fingerprint;

pub mod matcher;

pub mod recommend;

pub mod report;

pub mod seo;

pub mod similarity;

pub mod stats;

pub mod store;

pub mod text;

pub use analyzer::ContentAnalyzer;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, Thresholds};

pub use error::{ConfigError, ConfigResult, StoreError, StoreResult};

pub use report::{ContentAnalysisResult, SimilarityMatch};

pub use store::{CorpusEntry, CorpusStore, MemoryCorpus};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
