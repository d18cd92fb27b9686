//! Career recommendations: job matching, skill gaps, learning plans and advice

pub mod advice;
pub mod engine;
pub mod scorer;

pub use engine::RecommendationEngine;
pub use scorer::{MatchScorer, ScoreBreakdown};

use crate::catalog::LearningResources;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Learning resources per missing skill, keyed by the skill as given and kept
/// in the order the skills were missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearningPlan {
    entries: Vec<(String, LearningResources)>,
}

impl LearningPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resources for a skill, replacing any earlier entry in place.
    pub fn insert(&mut self, skill: impl Into<String>, resources: LearningResources) {
        let skill = skill.into();
        match self.entries.iter_mut().find(|(name, _)| *name == skill) {
            Some((_, existing)) => *existing = resources,
            None => self.entries.push((skill, resources)),
        }
    }

    pub fn get(&self, skill: &str) -> Option<&LearningResources> {
        self.entries
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, resources)| resources)
    }

    pub fn contains_key(&self, skill: &str) -> bool {
        self.get(skill).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, LearningResources)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a LearningPlan {
    type Item = &'a (String, LearningResources);
    type IntoIter = std::slice::Iter<'a, (String, LearningResources)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, LearningResources)> for LearningPlan {
    fn from_iter<I: IntoIterator<Item = (S, LearningResources)>>(iter: I) -> Self {
        let mut plan = LearningPlan::new();
        for (skill, resources) in iter {
            plan.insert(skill, resources);
        }
        plan
    }
}

impl Serialize for LearningPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (skill, resources) in &self.entries {
            map.serialize_entry(skill, resources)?;
        }
        map.end()
    }
}

struct LearningPlanVisitor;

impl<'de> Visitor<'de> for LearningPlanVisitor {
    type Value = LearningPlan;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of skill to learning resources")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LearningPlan, A::Error> {
        let mut plan = LearningPlan::new();
        while let Some((skill, resources)) = access.next_entry::<String, LearningResources>()? {
            plan.insert(skill, resources);
        }
        Ok(plan)
    }
}

impl<'de> Deserialize<'de> for LearningPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LearningPlanVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub job_title: String,
    pub description: String,
    /// Percentage in `[0, 100]`, two decimals
    pub match_score: f64,
    pub missing_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub sector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub total_skills: usize,
    pub skill_categories: Vec<String>,
    pub strongest_category: Option<String>,
    pub in_demand_skills: Vec<String>,
    /// Category count over six; exceeds 1.0 for broad profiles
    pub skill_diversity_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub current_position: String,
    pub next_steps: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub market_insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub recommendations: Vec<MatchResult>,
    pub learning_plan: LearningPlan,
    pub skill_analysis: SkillAnalysis,
    pub personalized_advice: Advice,
}
