//! Career report structure shared by all output formats

use crate::processing::CandidateProfile;
use crate::recommend::{CareerAnalysis, MatchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed resume together with its career analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerReport {
    pub parsed_resume: CandidateProfile,
    pub career_analysis: CareerAnalysis,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,

    /// Resume (or skills file) the report was built from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    pub tool_version: String,

    pub processing_time_ms: u64,

    /// Number of job profiles that were scored
    pub catalog_profiles: usize,
}

/// Qualitative band for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    Excellent,
    Good,
    Fair,
    Weak,
}

impl MatchBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            MatchBand::Excellent
        } else if score >= 60.0 {
            MatchBand::Good
        } else if score >= 40.0 {
            MatchBand::Fair
        } else {
            MatchBand::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchBand::Excellent => "STRONG MATCH",
            MatchBand::Good => "GOOD MATCH",
            MatchBand::Fair => "PARTIAL MATCH",
            MatchBand::Weak => "WEAK MATCH",
        }
    }
}

impl CareerReport {
    pub fn new(
        parsed_resume: CandidateProfile,
        career_analysis: CareerAnalysis,
        source_file: Option<&Path>,
        processing_time_ms: u64,
        catalog_profiles: usize,
    ) -> Self {
        Self {
            parsed_resume,
            career_analysis,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                source_file: source_file.map(|p| p.display().to_string()),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                processing_time_ms,
                catalog_profiles,
            },
        }
    }

    pub fn top_match(&self) -> Option<&MatchResult> {
        self.career_analysis.recommendations.first()
    }

    /// Display name for the candidate, falling back to the source file stem.
    pub fn candidate_label(&self) -> String {
        if let Some(name) = &self.parsed_resume.name {
            return name.clone();
        }

        self.metadata
            .source_file
            .as_deref()
            .and_then(|f| Path::new(f).file_stem())
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "Candidate".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::RecommendationEngine;

    #[test]
    fn test_match_bands() {
        assert_eq!(MatchBand::from_score(80.0), MatchBand::Excellent);
        assert_eq!(MatchBand::from_score(79.99), MatchBand::Good);
        assert_eq!(MatchBand::from_score(40.0), MatchBand::Fair);
        assert_eq!(MatchBand::from_score(0.0), MatchBand::Weak);
    }

    #[test]
    fn test_candidate_label_fallbacks() {
        let profile = CandidateProfile::default();
        let analysis = RecommendationEngine::default().recommend(&profile, 1);

        let report = CareerReport::new(
            profile.clone(),
            analysis.clone(),
            Some(Path::new("resumes/jane_doe.pdf")),
            5,
            65,
        );
        assert_eq!(report.candidate_label(), "jane_doe");

        let anonymous = CareerReport::new(profile, analysis, None, 5, 65);
        assert_eq!(anonymous.candidate_label(), "Candidate");
        assert!(anonymous.top_match().is_some());
    }
}
