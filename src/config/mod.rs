//! Configuration module for Crawl-Bench
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. A config file is optional: every field has a default, and the CLI
//! overrides individual values.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CrawlConfig, CrawlerConfig, InputConfig, OutputConfig, DEFAULT_CLIENT_TIMEOUT_SECS,
    DEFAULT_MAX_CONCURRENT_FETCHES, DEFAULT_REPORT_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_URLS_PATH,
};

// Re-export parser functions
pub use parser::{load_config, resolve_concurrency};

// Re-export validation
pub use validation::validate;
