//! Resume text processing: field extraction, skill extraction and profile assembly

pub mod entities;
pub mod fields;
pub mod profile;
pub mod skills;

pub use profile::{parse, parse_with, CandidateProfile, SkillMap};
