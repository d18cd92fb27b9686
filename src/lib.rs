//! careerpath library: resume parsing and career recommendations

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod recommend;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CareerPathError, Result};
pub use processing::{parse, parse_with, CandidateProfile};
pub use recommend::{CareerAnalysis, RecommendationEngine};
