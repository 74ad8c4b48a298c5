//! Crawl-Bench: a bounded-concurrency URL fetch benchmark
//!
//! This crate fetches a list of URLs with a cap on in-flight requests,
//! classifies each response, times each fetch, and emits a JSON report
//! (per-URL records plus an aggregate summary) for comparison against
//! companion crawler implementations.

pub mod config;
pub mod crawler;
pub mod input;
pub mod report;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Crawl-Bench operations
///
/// Per-URL fetch failures are never surfaced here: the fetcher folds them
/// into [`report::FetchRecord`] data. These variants cover the conditions
/// that are fatal to the whole run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL list not found: {}", path.display())]
    InputMissing { path: PathBuf },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Crawl-Bench operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, Coordinator};
pub use report::{FetchRecord, Report, Summary};
