//! Report data model and persistence
//!
//! One report per run: an ordered sequence of per-URL records, indexed to
//! input order, plus an aggregate summary derived purely from that sequence.

mod types;
mod writer;

pub use types::{FetchRecord, Report, Summary};
pub use writer::{print_summary, write_report};
