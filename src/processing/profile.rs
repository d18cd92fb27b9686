//! Candidate profile assembled from resume text

use crate::processing::entities::{shared_recognizer, EntityRecognizer};
use crate::processing::fields::FieldExtractor;
use crate::processing::skills::extract_skills;
use log::debug;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_EXCERPT_CHARS: usize = 1000;

/// Skills grouped by category, in insertion order.
///
/// Serialized as a JSON object whose key order follows the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMap {
    entries: Vec<(String, Vec<String>)>,
}

impl SkillMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add skills under a category, appending if it already exists.
    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<String>) {
        let category = category.into();
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => existing.extend(skills),
            None => self.entries.push((category, skills)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Every skill, in category order.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, skills)| skills.iter().map(String::as_str))
    }

    /// The lower-cased set used for all membership tests.
    pub fn flatten_lower(&self) -> HashSet<String> {
        self.skills().map(str::to_lowercase).collect()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, skills)| skills.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Into<String>, S: Into<String>> FromIterator<(C, Vec<S>)> for SkillMap {
    fn from_iter<I: IntoIterator<Item = (C, Vec<S>)>>(iter: I) -> Self {
        let mut map = SkillMap::new();
        for (category, skills) in iter {
            map.insert(category, skills.into_iter().map(Into::into).collect());
        }
        map
    }
}

impl Serialize for SkillMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, skills) in &self.entries {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

struct SkillMapVisitor;

impl<'de> Visitor<'de> for SkillMapVisitor {
    type Value = SkillMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of skill category to skill list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SkillMap, A::Error> {
        let mut map = SkillMap::new();
        while let Some((category, skills)) = access.next_entry::<String, Vec<String>>()? {
            map.insert(category, skills);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for SkillMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SkillMapVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: SkillMap,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub raw_text: String,
}

/// Parse resume text with the shared entity recognizer.
pub fn parse(text: &str) -> CandidateProfile {
    parse_with(text, shared_recognizer(), DEFAULT_EXCERPT_CHARS)
}

pub fn parse_with(
    text: &str,
    recognizer: &dyn EntityRecognizer,
    excerpt_chars: usize,
) -> CandidateProfile {
    let fields = FieldExtractor::shared();

    let profile = CandidateProfile {
        name: fields.extract_name(text, recognizer),
        email: fields.extract_email(text),
        phone: fields.extract_phone(text),
        skills: extract_skills(text),
        education: fields.extract_education(text),
        experience: fields.extract_experience(text),
        raw_text: excerpt(text, excerpt_chars),
    };

    debug!(
        "Parsed profile: {} skills in {} categories, {} experience lines",
        profile.skills.total(),
        profile.skills.len(),
        profile.experience.len()
    );

    profile
}

fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
