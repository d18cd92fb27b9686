//! Recommendation engine over the job catalog

use crate::catalog::{Catalog, LearningResources};
use crate::config::ScoringConfig;
use crate::processing::{CandidateProfile, SkillMap};
use crate::recommend::advice;
use crate::recommend::scorer::MatchScorer;
use crate::recommend::{Advice, CareerAnalysis, LearningPlan, MatchResult, SkillAnalysis};
use log::{debug, info};
use std::collections::HashSet;

/// Category count at which the diversity score reaches 1.0.
const DIVERSITY_SCALE: f64 = 6.0;

pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
    scorer: MatchScorer<'a>,
}

impl Default for RecommendationEngine<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin(), ScoringConfig::default())
    }
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a Catalog, scoring: ScoringConfig) -> Self {
        Self {
            catalog,
            scorer: MatchScorer::new(catalog, scoring),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Score every job profile and return the best `top_n`, highest first.
    pub fn career_recommendations(
        &self,
        skills: &SkillMap,
        top_n: usize,
        context: Option<&[String]>,
    ) -> Vec<MatchResult> {
        let candidate = skills.flatten_lower();

        let mut results: Vec<MatchResult> = self
            .catalog
            .jobs()
            .iter()
            .map(|job| {
                let score = self.scorer.score(skills, job, context);
                MatchResult {
                    job_id: job.id.clone(),
                    job_title: job.title.clone(),
                    description: job.description.clone(),
                    match_score: to_percent(score),
                    missing_skills: missing_skills(&candidate, &job.required_skills),
                    required_skills: job.required_skills.clone(),
                    preferred_skills: job.preferred_skills.clone(),
                    sector: job.sector.clone(),
                }
            })
            .collect();

        // Stable, so equal scores keep catalog order
        results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results.truncate(top_n);

        debug!(
            "Scored {} job profiles, keeping top {}",
            self.catalog.jobs().len(),
            results.len()
        );
        results
    }

    pub fn learning_plan(&self, missing: &[String]) -> LearningPlan {
        missing
            .iter()
            .map(|skill| {
                let resources = self
                    .catalog
                    .learning_resources(skill)
                    .cloned()
                    .unwrap_or_else(|| generic_resources(skill));
                (skill.clone(), resources)
            })
            .collect()
    }

    pub fn skill_analysis(&self, skills: &SkillMap) -> SkillAnalysis {
        let mut strongest: Option<(&str, usize)> = None;
        for (category, list) in skills.iter() {
            if strongest.map_or(true, |(_, best)| list.len() > best) {
                strongest = Some((category, list.len()));
            }
        }

        let high_demand: HashSet<String> = self
            .catalog
            .high_demand_skills()
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        let mut seen = HashSet::new();
        let in_demand_skills = skills
            .skills()
            .filter(|skill| {
                let lower = skill.to_lowercase();
                high_demand.contains(&lower) && seen.insert(lower)
            })
            .map(str::to_string)
            .collect();

        SkillAnalysis {
            total_skills: skills.total(),
            skill_categories: skills.categories().map(str::to_string).collect(),
            strongest_category: strongest.map(|(category, _)| category.to_string()),
            in_demand_skills,
            skill_diversity_score: skills.len() as f64 / DIVERSITY_SCALE,
        }
    }

    pub fn personalized_advice(&self, skills: &SkillMap, recommendations: &[MatchResult]) -> Advice {
        advice::personalized_advice(&self.skill_analysis(skills), recommendations)
    }

    /// Full analysis of a parsed resume, using its experience lines as context.
    pub fn recommend(&self, profile: &CandidateProfile, top_n: usize) -> CareerAnalysis {
        self.recommend_with_context(profile, top_n, Some(profile.experience.as_slice()))
    }

    /// Full analysis with explicit experience context. `None` scores on skill
    /// coverage alone, with no title or experience bonus and no damping.
    pub fn recommend_with_context(
        &self,
        profile: &CandidateProfile,
        top_n: usize,
        context: Option<&[String]>,
    ) -> CareerAnalysis {
        let recommendations = self.career_recommendations(&profile.skills, top_n, context);

        let learning_plan = recommendations
            .first()
            .map(|top| self.learning_plan(&top.missing_skills))
            .unwrap_or_default();

        let skill_analysis = self.skill_analysis(&profile.skills);
        let personalized_advice = advice::personalized_advice(&skill_analysis, &recommendations);

        if let Some(top) = recommendations.first() {
            info!("Top match: {} ({:.2}%)", top.job_title, top.match_score);
        }

        CareerAnalysis {
            recommendations,
            learning_plan,
            skill_analysis,
            personalized_advice,
        }
    }
}

fn to_percent(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}

fn missing_skills(candidate: &HashSet<String>, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|skill| !candidate.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

fn generic_resources(skill: &str) -> LearningResources {
    LearningResources {
        courses: vec![format!(
            "Search for \"{}\" courses on Coursera, Udemy, or edX",
            skill
        )],
        books: vec![format!("Search for \"{}\" books on Amazon or Goodreads", skill)],
        practice: vec![
            "Build projects".to_string(),
            "Contribute to open source".to_string(),
            "Join communities".to_string(),
        ],
    }
}
