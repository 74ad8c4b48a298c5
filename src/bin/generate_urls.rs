//! URL corpus generator
//!
//! Writes a newline-delimited URL list for exercising the crawler: a mix of
//! Wikipedia articles, httpbin endpoints, and popular sites, padded out with
//! query-parameter variants once the base lists are exhausted. Output is
//! deterministic so benchmark runs stay repeatable.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki/";
const HTTPBIN_BASE: &str = "https://httpbin.org/";

const WIKIPEDIA_ARTICLES: &[&str] = &[
    "Algorithm",
    "Computer_science",
    "Programming_language",
    "Artificial_intelligence",
    "Machine_learning",
    "Data_science",
    "Computer_network",
    "Database",
    "Cloud_computing",
    "Cybersecurity",
    "Operating_system",
    "Web_development",
    "Software_engineering",
    "Quantum_computing",
    "Blockchain",
    "Cryptography",
    "Big_data",
    "Robotics",
    "Computer_vision",
    "Natural_language_processing",
    "Neural_network",
    "Deep_learning",
    "Reinforcement_learning",
    "Computer_architecture",
    "Computer_graphics",
    "Information_theory",
    "Computer_security",
    "Software_testing",
    "Web_browser",
    "Web_server",
    "Search_engine",
    "World_Wide_Web",
    "Internet_Protocol",
    "HTTP",
    "HTTPS",
    "HTML",
    "CSS",
    "JavaScript",
    "XML",
    "JSON",
];

const HTTPBIN_ENDPOINTS: &[&str] = &[
    "get",
    "ip",
    "user-agent",
    "headers",
    "uuid",
    "status/200",
    "status/404",
    "status/500",
    "delay/1",
    "html",
    "json",
    "image/png",
    "image/jpeg",
    "robots.txt",
    "xml",
    "anything",
];

const POPULAR_WEBSITES: &[&str] = &[
    "https://github.com",
    "https://stackoverflow.com",
    "https://news.ycombinator.com",
    "https://example.com",
    "https://mozilla.org",
    "https://developer.mozilla.org",
    "https://dev.to",
    "https://go.dev",
];

/// Generate a URL list for crawler benchmarking
#[derive(Parser, Debug)]
#[command(name = "generate-urls")]
#[command(about = "Generate a newline-delimited URL list for crawl-bench")]
struct Cli {
    /// Number of URLs to generate
    #[arg(long, default_value_t = 100)]
    count: usize,

    /// Output file name
    #[arg(long, default_value = "urls.txt")]
    output: PathBuf,
}

/// Builds the URL list: popular sites first, then Wikipedia articles and
/// httpbin endpoints, then query-parameter variants of cycled base URLs
/// until the requested count is reached. Duplicates with distinct
/// parameters are intentional corpus entries.
fn generate_urls(count: usize) -> Vec<String> {
    let mut urls: Vec<String> = Vec::with_capacity(count);

    urls.extend(POPULAR_WEBSITES.iter().map(|site| site.to_string()));
    urls.extend(
        WIKIPEDIA_ARTICLES
            .iter()
            .take(count / 2)
            .map(|article| format!("{}{}", WIKIPEDIA_BASE, article)),
    );
    urls.extend(
        HTTPBIN_ENDPOINTS
            .iter()
            .take(count / 4)
            .map(|endpoint| format!("{}{}", HTTPBIN_BASE, endpoint)),
    );

    let base_len = urls.len();
    for i in 0..count.saturating_sub(base_len) {
        let base = &urls[i % base_len];
        urls.push(format!("{}?param{}={}", base, i, (i * 37) % 1000));
    }

    urls.truncate(count);
    urls
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let urls = generate_urls(cli.count);

    let mut content = urls.join("\n");
    content.push('\n');
    std::fs::write(&cli.output, content)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "Generated {} URLs and saved to {}",
        urls.len(),
        cli.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(generate_urls(0).len(), 0);
        assert_eq!(generate_urls(5).len(), 5);
        assert_eq!(generate_urls(100).len(), 100);
        assert_eq!(generate_urls(500).len(), 500);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_urls(250), generate_urls(250));
    }

    #[test]
    fn test_padding_uses_query_variants() {
        let count = 300;
        let urls = generate_urls(count);
        let variants = urls.iter().filter(|u| u.contains("?param")).count();
        assert!(variants > 0);
        assert_eq!(urls.len(), count);
    }

    #[test]
    fn test_all_entries_are_absolute_urls() {
        for url in generate_urls(200) {
            assert!(url.starts_with("https://"), "unexpected entry: {}", url);
        }
    }
}
