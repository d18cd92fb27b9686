//! Report generation in console, JSON, Markdown and HTML formats

pub mod formatter;
pub mod report;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{CareerReport, MatchBand, ReportMetadata};
