//! Keyword-based skill extraction

use crate::catalog::{Catalog, SkillCategory};
use crate::processing::profile::SkillMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases that put a bare `r` in a programming context.
const R_CONTEXT_MARKERS: &[&str] = &[
    r"\bprogramming\s+languages?\b",
    r"\blanguages?\b",
    r"\btechnologies?\b",
    r"\bskills?\b",
    r"\btech\s+stack\b",
    r"\bprogramming\b",
    r"\bcoding\b",
    r"\bdevelopment\b",
];

/// Characters on each side of a marker searched for a standalone `r`.
const R_CONTEXT_WINDOW: usize = 50;

static BUILTIN: Lazy<SkillExtractor> =
    Lazy::new(|| SkillExtractor::new(Catalog::builtin().skill_table()));

enum KeywordMatcher {
    Boundary(Regex),
    /// The single letter `r`, which only counts near a programming marker
    RLanguage,
}

struct CompiledKeyword {
    keyword: String,
    matcher: KeywordMatcher,
}

struct CompiledCategory {
    name: String,
    keywords: Vec<CompiledKeyword>,
}

/// A skill table with every keyword pattern compiled up front.
pub struct SkillExtractor {
    categories: Vec<CompiledCategory>,
    r_markers: Vec<Regex>,
    standalone_r: Regex,
}

impl SkillExtractor {
    pub fn new(table: &[SkillCategory]) -> Self {
        let categories = table
            .iter()
            .map(|category| CompiledCategory {
                name: category.name.clone(),
                keywords: category.keywords.iter().map(|k| compile_keyword(k)).collect(),
            })
            .collect();

        let r_markers = R_CONTEXT_MARKERS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("Invalid context marker regex"))
            .collect();

        Self {
            categories,
            r_markers,
            standalone_r: Regex::new(r"\br\b").expect("Invalid standalone r regex"),
        }
    }

    /// The extractor for the built-in skill table.
    pub fn builtin() -> &'static SkillExtractor {
        &BUILTIN
    }

    /// Categories with at least one match, each listing its matched keywords
    /// in table order.
    pub fn extract(&self, text: &str) -> SkillMap {
        let text = text.to_lowercase();
        let mut skills = SkillMap::new();

        for category in &self.categories {
            let found: Vec<String> = category
                .keywords
                .iter()
                .filter(|kw| self.matches(kw, &text))
                .map(|kw| kw.keyword.clone())
                .collect();

            if !found.is_empty() {
                skills.insert(category.name.clone(), found);
            }
        }

        skills
    }

    fn matches(&self, keyword: &CompiledKeyword, text: &str) -> bool {
        match &keyword.matcher {
            KeywordMatcher::Boundary(regex) => regex.is_match(text),
            KeywordMatcher::RLanguage => {
                self.standalone_r.is_match(text) && self.r_in_programming_context(text)
            }
        }
    }

    fn r_in_programming_context(&self, text: &str) -> bool {
        self.r_markers.iter().any(|marker| {
            marker.find_iter(text).any(|m| {
                let window = &text[window_start(text, m.start())..window_end(text, m.end())];
                self.standalone_r.is_match(window)
            })
        })
    }
}

fn compile_keyword(keyword: &str) -> CompiledKeyword {
    let lower = keyword.to_lowercase();
    let matcher = if lower == "r" {
        KeywordMatcher::RLanguage
    } else {
        let pattern = format!(r"\b{}\b", regex::escape(&lower));
        KeywordMatcher::Boundary(Regex::new(&pattern).expect("Invalid skill keyword regex"))
    };

    CompiledKeyword {
        keyword: keyword.to_string(),
        matcher,
    }
}

/// Byte offset `R_CONTEXT_WINDOW` characters before `start`, or 0.
fn window_start(text: &str, start: usize) -> usize {
    text[..start]
        .char_indices()
        .rev()
        .nth(R_CONTEXT_WINDOW - 1)
        .map_or(0, |(idx, _)| idx)
}

/// Byte offset `R_CONTEXT_WINDOW` characters after `end`, or the text length.
fn window_end(text: &str, end: usize) -> usize {
    text[end..]
        .char_indices()
        .nth(R_CONTEXT_WINDOW)
        .map_or(text.len(), |(idx, _)| end + idx)
}

/// Extract skills with the built-in table.
pub fn extract_skills(text: &str) -> SkillMap {
    BUILTIN.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_in_table_order() {
        let skills = extract_skills("Built React frontends backed by PostgreSQL and Python services");

        let categories: Vec<&str> = skills.categories().collect();
        assert_eq!(categories, vec!["programming", "web_development", "databases"]);
        assert_eq!(skills.get("programming").unwrap(), ["python"]);
    }

    #[test]
    fn test_word_boundaries() {
        let skills = extract_skills("Experienced in javascripting and gopher wrangling");
        assert!(skills.get("programming").is_none());
    }

    #[test]
    fn test_multi_word_keywords() {
        let skills = extract_skills("Applied Machine Learning to fraud detection");
        assert!(skills.flatten_lower().contains("machine learning"));
    }

    #[test]
    fn test_r_needs_programming_context() {
        let skills = extract_skills("Programming languages: Python, R, SQL");
        let programming = skills.get("programming").unwrap();
        assert!(programming.contains(&"r".to_string()));
    }

    #[test]
    fn test_r_without_context_is_ignored() {
        let skills = extract_skills("Grade: R\nStatus: approved");
        assert!(skills.get("programming").is_none());
    }

    #[test]
    fn test_r_outside_window_is_ignored() {
        let filler = "x".repeat(80);
        let text = format!("skills {} r", filler);
        assert!(extract_skills(&text).get("programming").is_none());

        let near = format!("skills r {}", filler);
        assert!(extract_skills(&near).get("programming").is_some());
    }

    #[test]
    fn test_window_respects_multibyte_chars() {
        // marker starts 50 characters after the r
        let text = format!("r {} coding", "é".repeat(47));
        assert!(extract_skills(&text).get("programming").is_some());

        let text = format!("r {} coding", "é".repeat(49));
        assert!(extract_skills(&text).get("programming").is_none());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Python, Docker, Kubernetes, SQL, Leadership, Excel";
        assert_eq!(extract_skills(text), extract_skills(text));
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_custom_table() {
        let table = vec![SkillCategory {
            name: "systems".to_string(),
            keywords: vec!["Rust".to_string(), "c".to_string()],
        }];

        let extractor = SkillExtractor::new(&table);
        let skills = extractor.extract("Wrote C and rust daily");
        assert_eq!(skills.get("systems").unwrap(), ["Rust", "c"]);
    }
}
