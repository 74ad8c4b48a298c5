use serde::{Deserialize, Serialize};

/// Outcome of a single fetch
///
/// Field order matches the report wire format so serialized output stays
/// directly comparable with the companion crawlers. `status` is the HTTP
/// status code, or -1 when no HTTP response was obtained. Records are
/// immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchRecord {
    pub url: String,
    pub title: String,
    pub status: i32,
    pub time_taken: f64,
    pub domain: String,
}

/// Aggregate statistics for a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_urls: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
    pub total_time: f64,
    pub average_time_per_url: f64,
}

impl Summary {
    /// Aggregates a completed record set
    ///
    /// `total_time` is the wall-clock duration of the whole run. A fetch is
    /// successful exactly when its status is 200; everything else, including
    /// the -1 sentinel, counts as failed. The zero-URL case defines the
    /// average as 0 rather than dividing by zero.
    pub fn from_records(records: &[FetchRecord], total_time: f64) -> Self {
        let total_urls = records.len();
        let successful_fetches = records.iter().filter(|r| r.status == 200).count();
        let failed_fetches = total_urls - successful_fetches;
        let average_time_per_url = if total_urls > 0 {
            total_time / total_urls as f64
        } else {
            0.0
        };

        Self {
            total_urls,
            successful_fetches,
            failed_fetches,
            total_time,
            average_time_per_url,
        }
    }
}

/// The final output artifact of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub results: Vec<FetchRecord>,
}
