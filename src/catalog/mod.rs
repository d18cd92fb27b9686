//! Static career data: skill keywords, job profiles, learning resources and
//! skill aliases.
//!
//! The built-in catalog is assembled once per process and shared by reference.
//! A TOML file can replace the job profiles, learning resources or
//! high-demand list while inheriting everything it does not mention.

mod aliases;
mod jobs;
mod resources;
mod skills;

use crate::error::{CareerPathError, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::assemble_builtin);

/// A named group of skill keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default = "default_sector")]
    pub sector: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningResources {
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub books: Vec<String>,
    #[serde(default)]
    pub practice: Vec<String>,
}

fn default_sector() -> String {
    "unknown".to_string()
}

/// On-disk override format. Every section is optional.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    jobs: Option<Vec<JobProfile>>,
    learning_resources: Option<BTreeMap<String, LearningResources>>,
    high_demand_skills: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    skill_table: Vec<SkillCategory>,
    jobs: Vec<JobProfile>,
    learning_resources: HashMap<String, LearningResources>,
    aliases: HashMap<String, Vec<String>>,
    high_demand_skills: Vec<String>,
}

impl Catalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    fn assemble_builtin() -> Self {
        let skill_table = skills::SKILL_KEYWORDS
            .iter()
            .map(|(name, keywords)| SkillCategory {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        let jobs = jobs::JOB_PROFILES
            .iter()
            .map(|seed| JobProfile {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                required_skills: to_strings(seed.required),
                preferred_skills: Vec::new(),
                sector: seed.sector.to_string(),
            })
            .collect();

        let learning_resources = resources::LEARNING_RESOURCES
            .iter()
            .map(|seed| {
                (
                    seed.skill.to_lowercase(),
                    LearningResources {
                        courses: to_strings(seed.courses),
                        books: to_strings(seed.books),
                        practice: to_strings(seed.practice),
                    },
                )
            })
            .collect();

        let mut alias_map: HashMap<String, Vec<String>> = HashMap::new();
        for (target, sources) in aliases::ALIAS_GROUPS {
            for source in *sources {
                let targets = alias_map.entry(source.to_string()).or_default();
                if !targets.iter().any(|t| t == target) {
                    targets.push(target.to_string());
                }
            }
        }

        Self {
            skill_table,
            jobs,
            learning_resources,
            aliases: alias_map,
            high_demand_skills: to_strings(aliases::HIGH_DEMAND_SKILLS),
        }
    }

    /// Load a catalog override from a TOML file on top of the built-in data.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CareerPathError::Catalog(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            "Loaded catalog from {} ({} job profiles)",
            path.display(),
            catalog.jobs.len()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| CareerPathError::Catalog(format!("Failed to parse catalog: {}", e)))?;

        let mut catalog = Self::builtin().clone();

        if let Some(jobs) = file.jobs {
            validate_jobs(&jobs)?;
            debug!("Catalog override replaces {} job profiles", jobs.len());
            catalog.jobs = jobs;
        }

        if let Some(resources) = file.learning_resources {
            catalog.learning_resources = resources
                .into_iter()
                .map(|(skill, res)| (skill.to_lowercase(), res))
                .collect();
        }

        if let Some(high_demand) = file.high_demand_skills {
            catalog.high_demand_skills = high_demand;
        }

        Ok(catalog)
    }

    pub fn skill_table(&self) -> &[SkillCategory] {
        &self.skill_table
    }

    pub fn jobs(&self) -> &[JobProfile] {
        &self.jobs
    }

    pub fn job(&self, id: &str) -> Option<&JobProfile> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Sectors in first-seen catalog order.
    pub fn sectors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.jobs
            .iter()
            .map(|job| job.sector.as_str())
            .filter(|sector| seen.insert(*sector))
            .collect()
    }

    pub fn learning_resources(&self, skill: &str) -> Option<&LearningResources> {
        self.learning_resources.get(&skill.to_lowercase())
    }

    /// Skills with curated resources, sorted.
    pub fn resource_skills(&self) -> Vec<&str> {
        let mut skills: Vec<&str> = self.learning_resources.keys().map(String::as_str).collect();
        skills.sort_unstable();
        skills
    }

    /// Broader skill tokens a lower-cased skill also counts as.
    pub fn aliases_for(&self, skill: &str) -> &[String] {
        self.aliases.get(skill).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn high_demand_skills(&self) -> &[String] {
        &self.high_demand_skills
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn validate_jobs(jobs: &[JobProfile]) -> Result<()> {
    if jobs.is_empty() {
        return Err(CareerPathError::Catalog(
            "Catalog must define at least one job profile".to_string(),
        ));
    }

    let mut ids = HashSet::new();
    for job in jobs {
        if job.id.trim().is_empty() || job.title.trim().is_empty() {
            return Err(CareerPathError::Catalog(
                "Job profiles need a non-empty id and title".to_string(),
            ));
        }
        if !ids.insert(job.id.as_str()) {
            return Err(CareerPathError::Catalog(format!(
                "Duplicate job profile id: {}",
                job.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.skill_table().len(), 19);
        assert_eq!(catalog.jobs().len(), 65);
        assert_eq!(catalog.resource_skills().len(), 43);
        assert_eq!(catalog.sectors().len(), 13);
    }

    #[test]
    fn test_programming_includes_r() {
        let programming = &Catalog::builtin().skill_table()[0];
        assert_eq!(programming.name, "programming");
        assert!(programming.keywords.iter().any(|k| k == "r"));
    }

    #[test]
    fn test_job_ids_unique() {
        assert!(validate_jobs(Catalog::builtin().jobs()).is_ok());
    }

    #[test]
    fn test_job_lookup() {
        let job = Catalog::builtin().job("data_scientist").unwrap();
        assert_eq!(job.title, "Data Scientist");
        assert!(job.required_skills.contains(&"sql".to_string()));
        assert!(job.preferred_skills.is_empty());
        assert!(Catalog::builtin().job("astronaut").is_none());
    }

    #[test]
    fn test_aliases_union_targets() {
        let catalog = Catalog::builtin();
        let docker = catalog.aliases_for("docker");
        assert!(docker.contains(&"cloud_platforms".to_string()));
        assert!(docker.contains(&"devops".to_string()));

        assert_eq!(catalog.aliases_for("python"), ["programming".to_string()]);
        assert_eq!(catalog.aliases_for("azure"), ["cloud_platforms".to_string()]);
        assert!(catalog.aliases_for("cobol").is_empty());
    }

    #[test]
    fn test_shared_alias_sources_map_to_every_group() {
        let catalog = Catalog::builtin();
        let pinned: &[(&str, &[&str])] = &[
            ("docker", &["cloud_platforms", "devops"]),
            ("kubernetes", &["cloud_platforms", "devops"]),
            ("terraform", &["cloud_platforms", "devops"]),
            ("jenkins", &["cloud_platforms", "devops"]),
            ("gitlab", &["cloud_platforms", "git"]),
            ("github actions", &["devops"]),
            ("azure", &["cloud_platforms"]),
            ("git", &["git"]),
        ];

        for (skill, targets) in pinned {
            assert_eq!(catalog.aliases_for(skill), *targets, "aliases for {}", skill);
        }
    }

    #[test]
    fn test_learning_resources_case_insensitive() {
        let catalog = Catalog::builtin();
        let python = catalog.learning_resources("Python").unwrap();
        assert!(!python.courses.is_empty());
        assert!(catalog.learning_resources("basket weaving").is_none());
    }

    #[test]
    fn test_override_replaces_only_given_sections() {
        let content = r#"
            [[jobs]]
            id = "rustacean"
            title = "Rust Engineer"
            description = "Writes Rust"
            required_skills = ["rust", "git"]
            preferred_skills = ["docker"]
        "#;

        let catalog = Catalog::from_toml_str(content).unwrap();
        assert_eq!(catalog.jobs().len(), 1);
        assert_eq!(catalog.jobs()[0].sector, "unknown");
        assert_eq!(catalog.jobs()[0].preferred_skills, vec!["docker"]);
        assert_eq!(catalog.resource_skills().len(), 43);
        assert_eq!(catalog.high_demand_skills().len(), 7);
    }

    #[test]
    fn test_override_rejects_duplicate_ids() {
        let content = r#"
            [[jobs]]
            id = "a"
            title = "A"
            description = ""
            required_skills = []

            [[jobs]]
            id = "a"
            title = "B"
            description = ""
            required_skills = []
        "#;

        assert!(matches!(
            Catalog::from_toml_str(content),
            Err(CareerPathError::Catalog(_))
        ));
    }

    #[test]
    fn test_override_learning_resources() {
        let content = r#"
            high_demand_skills = ["rust"]

            [learning_resources.Rust]
            books = ["The Rust Programming Language"]
        "#;

        let catalog = Catalog::from_toml_str(content).unwrap();
        assert_eq!(catalog.resource_skills(), vec!["rust"]);
        let rust = catalog.learning_resources("rust").unwrap();
        assert!(rust.courses.is_empty());
        assert_eq!(rust.books.len(), 1);
        assert_eq!(catalog.high_demand_skills(), ["rust".to_string()]);
        assert_eq!(catalog.jobs().len(), 65);
    }
}
