//! Fetch engine: limiter, fetcher, classifier, and orchestration
//!
//! This module contains the core crawl logic, including:
//! - Bounded-concurrency admission of fetch tasks
//! - HTTP fetching with per-request deadlines and error classification
//! - Response content classification (HTML title, JSON size, content type)
//! - Orchestration of a full run into a report

mod classifier;
mod coordinator;
mod fetcher;
mod limiter;

pub use classifier::{classify_body, ClassifyError};
pub use coordinator::{crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url};
pub use limiter::FetchLimiter;
