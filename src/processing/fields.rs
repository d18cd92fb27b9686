//! Contact and history field extraction from raw resume text

use crate::processing::entities::{EntityLabel, EntityRecognizer};
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "degree",
    "university",
    "college",
];

const EXPERIENCE_HEADERS: &[&str] = &[
    "work experience",
    "experience",
    "employment history",
    "professional experience",
];

const JOB_TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "specialist",
    "coordinator",
    "director",
];

const NAME_SCAN_LINES: usize = 5;
const MAX_TITLE_WORDS: usize = 4;

static EXTRACTOR: Lazy<FieldExtractor> = Lazy::new(FieldExtractor::new);

/// Regex and keyword automata for the per-field scans.
pub struct FieldExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    education_matcher: AhoCorasick,
    header_matcher: AhoCorasick,
    title_matcher: AhoCorasick,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
            .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"(\+?1?[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})")
                .expect("Invalid phone regex");

        Self {
            email_regex,
            phone_regex,
            education_matcher: keyword_matcher(EDUCATION_KEYWORDS),
            header_matcher: keyword_matcher(EXPERIENCE_HEADERS),
            title_matcher: keyword_matcher(JOB_TITLE_KEYWORDS),
        }
    }

    /// The shared extractor used by the module-level helpers.
    pub fn shared() -> &'static FieldExtractor {
        &EXTRACTOR
    }

    /// Look for a name among the first few non-empty lines, falling back to
    /// person entities from the recognizer.
    pub fn extract_name(&self, text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
        let heading = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(NAME_SCAN_LINES)
            .find(|line| looks_like_name(line));

        if let Some(line) = heading {
            return Some(line.to_string());
        }

        recognizer
            .extract_entities(text)
            .into_iter()
            .filter(|entity| entity.label == EntityLabel::Person)
            .map(|entity| entity.text.trim().to_string())
            .find(|name| {
                (3..=50).contains(&name.chars().count())
                    && !name.chars().any(char::is_numeric)
                    && !name.contains('@')
            })
    }

    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
    }

    /// Digits of the first phone-shaped match, keeping a `+` country prefix.
    pub fn extract_phone(&self, text: &str) -> Option<String> {
        let caps = self.phone_regex.captures(text)?;

        let mut phone: String = caps
            .get(1)
            .map(|prefix| {
                prefix
                    .as_str()
                    .chars()
                    .filter(|c| *c == '+' || c.is_ascii_digit())
                    .collect()
            })
            .unwrap_or_default();

        for group in 2..=4 {
            if let Some(m) = caps.get(group) {
                phone.push_str(m.as_str());
            }
        }

        Some(phone)
    }

    pub fn extract_education(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| self.education_matcher.is_match(line))
            .map(|line| line.trim().to_string())
            .collect()
    }

    /// Job-title and bullet lines from the experience section, or title-like
    /// lines from anywhere when no section yields anything.
    pub fn extract_experience(&self, text: &str) -> Vec<String> {
        let mut lines = text.lines();
        let mut experience = Vec::new();

        if lines.any(|line| self.header_matcher.is_match(line)) {
            for line in lines {
                let trimmed = line.trim();
                if trimmed.is_empty() || self.header_matcher.is_match(trimmed) {
                    continue;
                }
                if is_experience_line(trimmed) {
                    experience.push(trimmed.to_string());
                }
            }
        }

        if experience.is_empty() {
            experience = text
                .lines()
                .filter(|line| self.title_matcher.is_match(line) && has_title_separator(line))
                .map(|line| line.trim().to_string())
                .collect();
        }

        experience
    }
}

fn keyword_matcher(keywords: &[&str]) -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(keywords)
        .expect("Invalid keyword automaton")
}

fn looks_like_name(line: &str) -> bool {
    if line.chars().any(char::is_numeric) {
        return false;
    }
    if line.contains('@') || line.contains('|') || line.contains('•') {
        return false;
    }
    if !(3..=50).contains(&line.chars().count()) {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&words.len()) && words.iter().all(|word| word.chars().count() >= 2)
}

fn is_short_title(title: &str) -> bool {
    let title = title.trim();
    !title.is_empty() && title.split_whitespace().count() <= MAX_TITLE_WORDS
}

fn is_experience_line(line: &str) -> bool {
    if line.contains('|') {
        let mut parts = line.split('|');
        let title = parts.next().unwrap_or_default();
        return parts.next().is_some() && is_short_title(title);
    }

    // ASCII lowering keeps byte offsets aligned with the input line
    let lower = line.to_ascii_lowercase();
    if let Some(idx) = lower.find(" at ") {
        return is_short_title(&line[..idx]);
    }
    if let Some(idx) = line.find(" - ") {
        return is_short_title(&line[..idx]);
    }

    line.starts_with('•') || line.starts_with('-')
}

fn has_title_separator(line: &str) -> bool {
    line.contains('|') || line.to_ascii_lowercase().contains(" at ") || line.contains(" - ")
}

pub fn extract_email(text: &str) -> Option<String> {
    EXTRACTOR.extract_email(text)
}

pub fn extract_phone(text: &str) -> Option<String> {
    EXTRACTOR.extract_phone(text)
}

pub fn extract_education(text: &str) -> Vec<String> {
    EXTRACTOR.extract_education(text)
}

pub fn extract_experience(text: &str) -> Vec<String> {
    EXTRACTOR.extract_experience(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::entities::{Entity, NoopRecognizer};

    struct FixedRecognizer(Vec<Entity>);

    impl EntityRecognizer for FixedRecognizer {
        fn extract_entities(&self, _text: &str) -> Vec<Entity> {
            self.0.clone()
        }
    }

    fn person(text: &str) -> Entity {
        Entity {
            text: text.to_string(),
            label: EntityLabel::Person,
        }
    }

    #[test]
    fn test_extract_email() {
        assert_eq!(
            extract_email("Contact: jane.doe@example.com"),
            Some("jane.doe@example.com".to_string())
        );
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn test_extract_phone_variants() {
        assert_eq!(extract_phone("(555) 123-4567"), Some("5551234567".to_string()));
        assert_eq!(extract_phone("Call +1-555-123-4567"), Some("+15551234567".to_string()));
        assert_eq!(extract_phone("Phone: 555.123.4567"), Some("5551234567".to_string()));
        assert_eq!(extract_phone("ext 12"), None);
    }

    #[test]
    fn test_name_from_heading() {
        let text = "\n  Jane Doe  \njane@example.com | (555) 123-4567\n";
        let name = FieldExtractor::new().extract_name(text, &NoopRecognizer);
        assert_eq!(name, Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_name_rejects_contact_lines() {
        let text = "jane@example.com\n555-123-4567\nPortland | Oregon\nA B\nResume";
        let name = FieldExtractor::new().extract_name(text, &NoopRecognizer);
        assert_eq!(name, None);
    }

    #[test]
    fn test_name_falls_back_to_entities() {
        let recognizer = FixedRecognizer(vec![
            Entity {
                text: "Acme Corp".to_string(),
                label: EntityLabel::Organization,
            },
            person("R2"),
            person("  Ada Lovelace "),
        ]);

        let name = FieldExtractor::new().extract_name("SUMMARY\n2020", &recognizer);
        assert_eq!(name, Some("Ada Lovelace".to_string()));
    }

    #[test]
    fn test_extract_education_keeps_order() {
        let text = "EDUCATION\nBachelor of Science, MIT\nHigh school\n  State University  \n";
        assert_eq!(
            extract_education(text),
            vec!["Bachelor of Science, MIT", "State University"]
        );
    }

    #[test]
    fn test_experience_section_lines() {
        let text = "Jane Doe\n\nWORK EXPERIENCE\nSoftware Engineer | Acme | 2020-2022\n\
                    • Built services in Rust\nData Analyst at Globex\n\
                    A very long title with many words | Initech\nPlain sentence\n";

        assert_eq!(
            extract_experience(text),
            vec![
                "Software Engineer | Acme | 2020-2022",
                "• Built services in Rust",
                "Data Analyst at Globex",
            ]
        );
    }

    #[test]
    fn test_experience_at_is_case_insensitive() {
        let text = "Experience\nEngineer AT Initech\nLead - Platform\n";
        assert_eq!(
            extract_experience(text),
            vec!["Engineer AT Initech", "Lead - Platform"]
        );
    }

    #[test]
    fn test_experience_skips_later_header_lines() {
        let text = "Work Experience\nSoftware Engineer | Acme\n\
                    Professional Experience - Overview\nData Analyst at Globex\n";
        assert_eq!(
            extract_experience(text),
            vec!["Software Engineer | Acme", "Data Analyst at Globex"]
        );
    }

    #[test]
    fn test_experience_fallback_scan() {
        let text = "Jane Doe\nSenior Developer at Acme\nProject Manager\nAnalyst - Finance team\n";
        assert_eq!(
            extract_experience(text),
            vec!["Senior Developer at Acme", "Analyst - Finance team"]
        );
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let extractor = FieldExtractor::new();
        assert_eq!(extractor.extract_name("", &NoopRecognizer), None);
        assert_eq!(extractor.extract_email(""), None);
        assert_eq!(extractor.extract_phone(""), None);
        assert!(extractor.extract_education("").is_empty());
        assert!(extractor.extract_experience("").is_empty());
    }
}
