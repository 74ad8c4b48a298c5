//! HTTP fetch execution
//!
//! This module performs one GET per URL under a hard deadline and folds
//! every outcome into a [`FetchRecord`]: a classified body summary on 200,
//! an error title otherwise. A fetch never propagates a failure out of this
//! module; the whole run survives any single URL.

use crate::config::CrawlerConfig;
use crate::crawler::classifier::classify_body;
use crate::report::FetchRecord;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// Builds the HTTP client shared by all fetch tasks
///
/// The client-level timeout is a looser ceiling than the per-request
/// deadline applied in [`fetch_url`]. The idle connection pool is capped in
/// line with the concurrency limit so connection creation stays bounded.
/// Redirects follow reqwest's default policy, matching the reference
/// crawlers this tool is compared against.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("crawl-bench/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config.client_timeout_secs))
        .connect_timeout(Duration::from_secs(config.request_timeout_secs))
        .pool_max_idle_per_host(config.max_concurrent_fetches)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL and classifies the outcome
///
/// The per-request `deadline` bounds total wall time from connection setup
/// through body read. Elapsed time covers the network request only; callers
/// acquire their concurrency slot before invoking this, so queueing delay is
/// excluded from `time_taken`.
///
/// Outcomes:
/// * 200 response: body classified into a title summary
/// * non-200 response: `"Error: HTTP {status}"`, body not read
/// * deadline expiry: status -1, `"Error: Timeout"`
/// * any other failure (connect, DNS, TLS, decode): status -1,
///   `"Error: {message}"`
pub async fn fetch_url(client: &Client, url: &str, deadline: Duration) -> FetchRecord {
    let domain = domain_of(url);
    let start = Instant::now();

    let response = match client.get(url).timeout(deadline).send().await {
        Ok(response) => response,
        Err(e) => return error_record(url, domain, &e, start),
    };

    let status = response.status().as_u16();
    if status != 200 {
        return FetchRecord {
            url: url.to_string(),
            title: format!("Error: HTTP {}", status),
            status: i32::from(status),
            time_taken: start.elapsed().as_secs_f64(),
            domain,
        };
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return error_record(url, domain, &e, start),
    };

    match classify_body(&content_type, &body) {
        Ok(title) => FetchRecord {
            url: url.to_string(),
            title,
            status: i32::from(status),
            time_taken: start.elapsed().as_secs_f64(),
            domain,
        },
        Err(e) => FetchRecord {
            url: url.to_string(),
            title: format!("Error: {}", e),
            status: -1,
            time_taken: start.elapsed().as_secs_f64(),
            domain,
        },
    }
}

/// Builds the record for a failed request
fn error_record(url: &str, domain: String, error: &reqwest::Error, start: Instant) -> FetchRecord {
    let title = if error.is_timeout() {
        "Error: Timeout".to_string()
    } else {
        format!("Error: {}", error_message(error))
    };

    FetchRecord {
        url: url.to_string(),
        title,
        status: -1,
        time_taken: start.elapsed().as_secs_f64(),
        domain,
    }
}

/// Short diagnostic for a failed request
fn error_message(error: &reqwest::Error) -> String {
    if error.is_builder() {
        "Invalid URL".to_string()
    } else if error.is_connect() {
        "Connection failed".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else {
        error.to_string()
    }
}

/// Derives the reporting domain from a URL: the host, with the port when
/// one is present. Unparseable URLs yield an empty string; they still get a
/// fetch attempt, which fails at the request layer.
pub(crate) fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed.host_str().map(|host| match parsed.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            })
        })
        .unwrap_or_default()
}
