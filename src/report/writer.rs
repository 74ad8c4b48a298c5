//! Report persistence and console output

use crate::report::{Report, Summary};
use crate::Result;
use std::path::Path;

/// Writes the report as pretty-printed JSON
///
/// The output shape is `{"summary": {...}, "results": [...]}`, human-diffable
/// against the companion crawlers' reports.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Prints the aggregate summary to stdout
pub fn print_summary(summary: &Summary) {
    println!("\nCrawl Summary:");
    println!("Total URLs processed: {}", summary.total_urls);
    println!("Successful fetches: {}", summary.successful_fetches);
    println!("Failed fetches: {}", summary.failed_fetches);
    println!("Total time: {:.2} seconds", summary.total_time);
    println!(
        "Average time per URL: {:.4} seconds",
        summary.average_time_per_url
    );
}
