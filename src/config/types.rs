use serde::Deserialize;

/// Default cap on concurrent in-flight fetches
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 10;

/// Default per-request deadline, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default client-level ceiling on total request time, in seconds
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 15;

/// Default URL list path
pub const DEFAULT_URLS_PATH: &str = "urls.txt";

/// Default report output path
pub const DEFAULT_REPORT_PATH: &str = "results.json";

/// Main configuration structure for Crawl-Bench
///
/// Every field carries a default so a config file is optional; CLI flags
/// override whatever the file provides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    pub crawler: CrawlerConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Fetch engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of fetches in the network-I/O phase at once
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: usize,

    /// Per-request deadline in seconds, covering connection setup through
    /// body read
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Client-level ceiling on total request time, in seconds; must be at
    /// least the per-request deadline
    #[serde(rename = "client-timeout-secs")]
    pub client_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            client_timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the newline-delimited URL list
    #[serde(rename = "urls-path")]
    pub urls_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            urls_path: DEFAULT_URLS_PATH.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the JSON report file
    #[serde(rename = "report-path")]
    pub report_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: DEFAULT_REPORT_PATH.to_string(),
        }
    }
}
