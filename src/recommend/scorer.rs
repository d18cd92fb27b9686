//! Job match scoring
//!
//! A score blends required/preferred skill coverage with bonuses taken from the
//! candidate's work history. Scores are fractions in `[0, 1]`.

use crate::catalog::{Catalog, JobProfile};
use crate::config::ScoringConfig;
use crate::processing::SkillMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

static STANDALONE_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bat\b").expect("Invalid title separator regex"));

/// Role phrases that earn the exact-role bonus when both titles contain them.
const EXACT_ROLE_PHRASES: &[&str] = &[
    "software engineer",
    "data scientist",
    "marketing manager",
    "civil engineer",
];

const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "specialist",
    "coordinator",
    "scientist",
];

pub const EXACT_ROLE_BONUS: f64 = 0.4;
pub const SAME_ROLE_BONUS: f64 = 0.3;
pub const RELATED_ROLE_BONUS: f64 = 0.2;

/// Intermediate values of a single score computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub required_match: f64,
    pub preferred_match: f64,
    pub base: f64,
    pub title_bonus: f64,
    pub experience_bonus: f64,
    pub total: f64,
}

pub struct MatchScorer<'a> {
    catalog: &'a Catalog,
    weights: ScoringConfig,
}

impl<'a> MatchScorer<'a> {
    pub fn new(catalog: &'a Catalog, weights: ScoringConfig) -> Self {
        Self { catalog, weights }
    }

    pub fn score(&self, skills: &SkillMap, job: &JobProfile, context: Option<&[String]>) -> f64 {
        self.breakdown(skills, job, context).total
    }

    pub fn breakdown(
        &self,
        skills: &SkillMap,
        job: &JobProfile,
        context: Option<&[String]>,
    ) -> ScoreBreakdown {
        let candidate = skills.flatten_lower();
        let expanded = self.expand(&candidate);

        let required = lower_set(&job.required_skills);
        let preferred = lower_set(&job.preferred_skills);

        let required_match = coverage(&expanded, &required);
        let preferred_match = coverage(&expanded, &preferred);
        let base =
            self.weights.required_weight * required_match + self.weights.preferred_weight * preferred_match;

        let Some(experience) = context else {
            return ScoreBreakdown {
                required_match,
                preferred_match,
                base,
                title_bonus: 0.0,
                experience_bonus: 0.0,
                total: base,
            };
        };

        let titles = candidate_titles(experience);
        let title_bonus = title_bonus(&job.title.to_lowercase(), &titles);

        // Overlap of the unexpanded skill set with the required skills
        let experience_bonus = if required.is_empty() {
            0.0
        } else {
            let overlap = candidate.intersection(&required).count();
            overlap as f64 / required.len() as f64 * self.weights.experience_bonus_weight
        };

        let total = if title_bonus > SAME_ROLE_BONUS {
            (base + title_bonus + experience_bonus).min(1.0)
        } else {
            (base * self.weights.unmatched_title_damping + title_bonus + experience_bonus).min(1.0)
        };

        ScoreBreakdown {
            required_match,
            preferred_match,
            base,
            title_bonus,
            experience_bonus,
            total,
        }
    }

    /// The candidate's skills plus every broader token they alias to.
    fn expand(&self, skills: &HashSet<String>) -> HashSet<String> {
        let mut expanded = skills.clone();
        for skill in skills {
            expanded.extend(self.catalog.aliases_for(skill).iter().cloned());
        }
        expanded
    }
}

fn lower_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

fn coverage(have: &HashSet<String>, want: &HashSet<String>) -> f64 {
    if want.is_empty() {
        return 0.0;
    }
    want.intersection(have).count() as f64 / want.len() as f64
}

/// Lower-cased job titles from experience lines: the text before the first
/// `|`, otherwise the text before a standalone `at`.
pub fn candidate_titles(experience: &[String]) -> Vec<String> {
    experience
        .iter()
        .filter_map(|line| {
            let title = match line.find('|') {
                Some(idx) => &line[..idx],
                None => &line[..STANDALONE_AT.find(line)?.start()],
            };
            let title = title.trim().to_lowercase();
            (!title.is_empty()).then_some(title)
        })
        .collect()
}

/// Bonus for the first candidate title that relates to the job title.
pub fn title_bonus(job_title: &str, titles: &[String]) -> f64 {
    titles
        .iter()
        .map(|title| title_tier(job_title, title))
        .find(|bonus| *bonus > 0.0)
        .unwrap_or(0.0)
}

fn title_tier(job_title: &str, title: &str) -> f64 {
    let both_contain = |phrase: &&str| job_title.contains(*phrase) && title.contains(*phrase);

    if EXACT_ROLE_PHRASES.iter().any(both_contain) {
        EXACT_ROLE_BONUS
    } else if job_title.contains(title) || title.contains(job_title) {
        SAME_ROLE_BONUS
    } else if ROLE_KEYWORDS.iter().any(both_contain) {
        RELATED_ROLE_BONUS
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, required: &[&str], preferred: &[&str]) -> JobProfile {
        JobProfile {
            id: title.to_lowercase().replace(' ', "_"),
            title: title.to_string(),
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            sector: "technology".to_string(),
        }
    }

    fn skills(entries: &[(&str, &[&str])]) -> SkillMap {
        entries
            .iter()
            .map(|(category, skills)| (*category, skills.to_vec()))
            .collect()
    }

    fn scorer() -> MatchScorer<'static> {
        MatchScorer::new(Catalog::builtin(), ScoringConfig::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_skills_have_no_required_match() {
        let b = scorer().breakdown(&SkillMap::new(), &job("Analyst", &["sql"], &[]), None);
        assert_eq!(b.required_match, 0.0);
        assert_eq!(b.total, 0.0);
    }

    #[test]
    fn test_empty_required_scores_zero() {
        let s = skills(&[("programming", &["python"])]);
        let b = scorer().breakdown(&s, &job("Anything", &[], &[]), None);
        assert_eq!(b.required_match, 0.0);
    }

    #[test]
    fn test_aliases_expand_to_categories() {
        let s = skills(&[("programming", &["Python"]), ("devops", &["docker"])]);
        let j = job("Platform Engineer", &["programming", "devops", "cloud_platforms", "go"], &[]);

        let b = scorer().breakdown(&s, &j, None);
        assert!(approx(b.required_match, 0.75));
        assert!(approx(b.total, 0.7 * 0.75));
    }

    #[test]
    fn test_preferred_weight() {
        let s = skills(&[("databases", &["sql"])]);
        let j = job("Analyst", &["excel"], &["databases"]);
        assert!(approx(scorer().score(&s, &j, None), 0.3));
    }

    #[test]
    fn test_exact_role_uses_undamped_base() {
        let s = skills(&[("programming", &["python"]), ("databases", &["sql"])]);
        let j = job("Software Engineer", &["python", "sql", "git", "algorithms"], &[]);
        let experience = vec!["Software Engineer | Acme | 2020-2022".to_string()];

        let b = scorer().breakdown(&s, &j, Some(experience.as_slice()));
        assert_eq!(b.title_bonus, EXACT_ROLE_BONUS);
        assert!(approx(b.experience_bonus, 0.5 * 0.2));
        assert!(approx(b.total, 0.35 + 0.4 + 0.1));
    }

    #[test]
    fn test_damped_branch_for_related_titles() {
        let s = skills(&[("programming", &["python"])]);
        let j = job("Data Engineer", &["python", "sql"], &[]);
        let experience = vec!["Backend Engineer at Globex".to_string()];

        let b = scorer().breakdown(&s, &j, Some(experience.as_slice()));
        assert_eq!(b.title_bonus, RELATED_ROLE_BONUS);
        assert!(approx(b.total, 0.35 * 0.7 + 0.2 + 0.1));
    }

    #[test]
    fn test_empty_context_still_damps() {
        let s = skills(&[("programming", &["python"])]);
        let j = job("Data Engineer", &["python"], &[]);

        let b = scorer().breakdown(&s, &j, Some(&[][..]));
        assert_eq!(b.title_bonus, 0.0);
        assert!(approx(b.total, 0.7 * 0.7 + 0.2));
    }

    #[test]
    fn test_total_is_capped() {
        let s = skills(&[("programming", &["python", "sql"])]);
        let j = job("Software Engineer", &["python", "sql"], &[]);
        let experience = vec!["Senior Software Engineer | Initech".to_string()];

        assert_eq!(scorer().score(&s, &j, Some(experience.as_slice())), 1.0);
    }

    #[test]
    fn test_candidate_titles() {
        let experience: Vec<String> = vec![
            "Data Analyst | Initech".to_string(),
            "Marketing Manager AT Globex".to_string(),
            "• Improved data pipelines".to_string(),
            " | orphan".to_string(),
        ];

        assert_eq!(
            candidate_titles(&experience),
            vec!["data analyst", "marketing manager"]
        );
    }

    #[test]
    fn test_first_qualifying_title_wins() {
        let titles = vec!["backend developer".to_string(), "data scientist".to_string()];
        assert_eq!(title_bonus("senior developer", &titles), RELATED_ROLE_BONUS);
        assert_eq!(title_bonus("data scientist", &titles), EXACT_ROLE_BONUS);
        assert_eq!(title_bonus("nurse", &titles), 0.0);
    }

    #[test]
    fn test_substring_titles() {
        let titles = vec!["lead web developer".to_string()];
        assert_eq!(title_bonus("web developer", &titles), SAME_ROLE_BONUS);
    }

    #[test]
    fn test_scores_stay_in_range_for_catalog() {
        let s = skills(&[
            ("programming", &["python", "javascript", "sql"]),
            ("cloud_platforms", &["aws", "docker"]),
        ]);
        let experience = vec!["Software Engineer | Acme".to_string()];

        for job in Catalog::builtin().jobs() {
            for context in [None, Some(experience.as_slice())] {
                let score = scorer().score(&s, job, context);
                assert!((0.0..=1.0).contains(&score), "{} scored {}", job.id, score);
            }
        }
    }
}
