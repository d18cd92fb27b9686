//! Named-entity recognition used as a fallback for name extraction
//!
//! Real NER models live outside this crate. They plug in through
//! [`EntityRecognizer`]; models that cannot be called concurrently implement
//! [`StatefulRecognizer`] and are wrapped in a [`SerializedRecognizer`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

pub trait EntityRecognizer: Send + Sync {
    fn extract_entities(&self, text: &str) -> Vec<Entity>;
}

/// A recognizer that needs exclusive access while it runs.
pub trait StatefulRecognizer: Send {
    fn recognize(&mut self, text: &str) -> Vec<Entity>;
}

/// Recognizer that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn extract_entities(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }
}

/// Serializes calls into a non-reentrant recognizer.
pub struct SerializedRecognizer<R> {
    inner: Mutex<R>,
}

impl<R: StatefulRecognizer> SerializedRecognizer<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            inner: Mutex::new(recognizer),
        }
    }
}

impl<R: StatefulRecognizer> EntityRecognizer for SerializedRecognizer<R> {
    fn extract_entities(&self, text: &str) -> Vec<Entity> {
        let mut recognizer = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        recognizer.recognize(text)
    }
}

/// Labels runs of two or three capitalized words as people.
///
/// Section headings and common resume vocabulary are skipped so that lines
/// like "Professional Experience" are not mistaken for names.
pub struct CapitalizedNameRecognizer {
    stop_words: Vec<&'static str>,
}

impl Default for CapitalizedNameRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CapitalizedNameRecognizer {
    pub fn new() -> Self {
        Self {
            stop_words: vec![
                "resume", "curriculum", "vitae", "cv", "summary", "objective", "profile",
                "contact", "experience", "work", "professional", "employment", "history",
                "education", "skills", "technical", "projects", "certifications", "references",
                "senior", "junior", "lead", "university", "college", "school", "institute",
                "inc", "llc", "ltd", "corp", "company", "street", "avenue", "road",
            ],
        }
    }

    fn is_name_word(&self, word: &str) -> bool {
        let starts_upper = word.chars().next().map_or(false, char::is_uppercase);
        if !starts_upper || word.chars().count() < 2 {
            return false;
        }
        if !word.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'') {
            return false;
        }

        let lower = word.to_lowercase();
        !self.stop_words.iter().any(|stop| *stop == lower)
    }

    fn flush(run: &mut Vec<&str>, entities: &mut Vec<Entity>) {
        if (2..=3).contains(&run.len()) {
            entities.push(Entity {
                text: run.join(" "),
                label: EntityLabel::Person,
            });
        }
        run.clear();
    }
}

impl EntityRecognizer for CapitalizedNameRecognizer {
    fn extract_entities(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for line in text.lines() {
            let mut run: Vec<&str> = Vec::new();
            for token in line.split_whitespace() {
                let word = token.trim_end_matches(|c: char| matches!(c, ',' | '.' | ';' | ':'));
                if self.is_name_word(word) {
                    run.push(word);
                    // Trailing punctuation ends the run after this word
                    if word.len() != token.len() {
                        Self::flush(&mut run, &mut entities);
                    }
                } else {
                    Self::flush(&mut run, &mut entities);
                }
            }
            Self::flush(&mut run, &mut entities);
        }

        entities
    }
}

static SHARED: Lazy<CapitalizedNameRecognizer> = Lazy::new(CapitalizedNameRecognizer::new);

/// The process-wide recognizer used when none is injected.
pub fn shared_recognizer() -> &'static dyn EntityRecognizer {
    &*SHARED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_finds_nothing() {
        assert!(NoopRecognizer.extract_entities("Jane Doe").is_empty());
    }

    #[test]
    fn test_capitalized_runs() {
        let recognizer = CapitalizedNameRecognizer::new();
        let entities = recognizer.extract_entities("Prepared by Grace Brewster Hopper, 1952");

        assert_eq!(
            entities,
            vec![Entity {
                text: "Grace Brewster Hopper".to_string(),
                label: EntityLabel::Person,
            }]
        );
    }

    #[test]
    fn test_headings_are_not_people() {
        let recognizer = CapitalizedNameRecognizer::new();
        assert!(recognizer
            .extract_entities("Professional Experience\nTechnical Skills")
            .is_empty());
    }

    #[test]
    fn test_long_runs_are_skipped() {
        let recognizer = CapitalizedNameRecognizer::new();
        assert!(recognizer
            .extract_entities("Alpha Beta Gamma Delta")
            .is_empty());
    }

    struct Counting {
        calls: usize,
    }

    impl StatefulRecognizer for Counting {
        fn recognize(&mut self, text: &str) -> Vec<Entity> {
            self.calls += 1;
            vec![Entity {
                text: format!("{} #{}", text, self.calls),
                label: EntityLabel::Other("TEST".to_string()),
            }]
        }
    }

    #[test]
    fn test_serialized_recognizer_across_threads() {
        let recognizer = std::sync::Arc::new(SerializedRecognizer::new(Counting { calls: 0 }));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let recognizer = recognizer.clone();
                std::thread::spawn(move || recognizer.extract_entities("x").len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }

        let last = recognizer.extract_entities("x");
        assert_eq!(last[0].text, "x #5");
    }

    #[test]
    fn test_shared_recognizer_is_single_instance() {
        let a = shared_recognizer() as *const dyn EntityRecognizer as *const ();
        let b = shared_recognizer() as *const dyn EntityRecognizer as *const ();
        assert_eq!(a, b);
    }
}
