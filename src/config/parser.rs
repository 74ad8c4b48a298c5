use crate::config::types::{CrawlConfig, DEFAULT_MAX_CONCURRENT_FETCHES};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(CrawlConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<CrawlConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: CrawlConfig = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Resolves a raw concurrency argument to a usable limit
///
/// Mirrors the lenient argv handling of the reference tools this crate is
/// benchmarked against: a non-numeric or non-positive value falls back to
/// the documented default of 10 with a warning instead of aborting.
pub fn resolve_concurrency(raw: &str) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(
                "Invalid concurrency value: {}. Using default: {}",
                raw,
                DEFAULT_MAX_CONCURRENT_FETCHES
            );
            DEFAULT_MAX_CONCURRENT_FETCHES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
max-concurrent-fetches = 25
request-timeout-secs = 5
client-timeout-secs = 8

[input]
urls-path = "./fixtures/urls.txt"

[output]
report-path = "./out/report.json"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_concurrent_fetches, 25);
        assert_eq!(config.crawler.request_timeout_secs, 5);
        assert_eq!(config.crawler.client_timeout_secs, 8);
        assert_eq!(config.input.urls_path, "./fixtures/urls.txt");
        assert_eq!(config.output.report_path, "./out/report.json");
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let config_content = r#"
[crawler]
max-concurrent-fetches = 3
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_concurrent_fetches, 3);
        assert_eq!(config.crawler.request_timeout_secs, 10);
        assert_eq!(config.crawler.client_timeout_secs, 15);
        assert_eq!(config.input.urls_path, "urls.txt");
        assert_eq!(config.output.report_path, "results.json");
    }

    #[test]
    fn test_load_empty_config_is_all_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_concurrent_fetches, 10);
        assert_eq!(config.input.urls_path, "urls.txt");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawler]
max-concurrent-fetches = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_resolve_concurrency_valid() {
        assert_eq!(resolve_concurrency("7"), 7);
        assert_eq!(resolve_concurrency(" 42 "), 42);
    }

    #[test]
    fn test_resolve_concurrency_non_numeric_falls_back() {
        assert_eq!(resolve_concurrency("lots"), 10);
        assert_eq!(resolve_concurrency(""), 10);
        assert_eq!(resolve_concurrency("3.5"), 10);
    }

    #[test]
    fn test_resolve_concurrency_zero_falls_back() {
        assert_eq!(resolve_concurrency("0"), 10);
    }

    #[test]
    fn test_resolve_concurrency_negative_falls_back() {
        assert_eq!(resolve_concurrency("-4"), 10);
    }
}
