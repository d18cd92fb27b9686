//! CLI interface for careerpath

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "careerpath")]
#[command(version)]
#[command(about = "Resume parsing and career path recommendations")]
#[command(
    long_about = "Extract skills, contact details and work history from a resume, rank job profiles by fit, and build a learning plan for the skills you are missing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume and print the extracted profile as JSON
    Parse {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// Parse a resume and recommend career paths
    Recommend {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Number of recommendations to return
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include learning plan and extracted history in console output
        #[arg(short, long)]
        detailed: bool,

        /// TOML file overriding the built-in job and resource catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Recommend career paths from a JSON skills file instead of a resume
    Analyze {
        /// JSON file shaped like {"skills": {"category": ["skill", ...]}, "experience": [...]}
        #[arg(short, long)]
        skills: PathBuf,

        /// Number of recommendations to return
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the best match for each of several resumes
    Batch {
        /// Resume files (PDF, TXT, MD)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of recommendations to consider per resume
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// List job profiles in the catalog
    Profiles {
        /// Only show profiles from this sector
        #[arg(short, long)]
        sector: Option<String>,
    },

    /// List skills with curated learning resources
    Resources,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend_args() {
        let cli = Cli::parse_from([
            "careerpath", "-v", "recommend", "--resume", "cv.pdf", "--top", "3", "--output", "md",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Recommend { resume, top, output, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(top, Some(3));
                assert_eq!(output.as_deref(), Some("md"));
            }
            _ => panic!("expected recommend command"),
        }
    }

    #[test]
    fn test_output_formats() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_file_extensions() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }
}
