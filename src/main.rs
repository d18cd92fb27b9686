//! careerpath: resume parsing and career path recommendations

use careerpath::catalog::Catalog;
use careerpath::cli::{self, Cli, Commands, ConfigAction};
use careerpath::config::{Config, OutputFormat};
use careerpath::error::{CareerPathError, Result};
use careerpath::input::InputManager;
use careerpath::output::{save_report_to_file, CareerReport, ReportGenerator};
use careerpath::processing::entities::shared_recognizer;
use careerpath::processing::{parse_with, CandidateProfile, SkillMap};
use careerpath::recommend::RecommendationEngine;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use serde::Deserialize;
use std::path::Path;
use std::process;
use std::time::Instant;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

/// Skills-only input accepted by `analyze`
#[derive(Debug, Deserialize)]
struct SkillsInput {
    #[serde(default)]
    skills: SkillMap,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    /// Work history lines; when absent, scoring uses skill coverage alone
    experience: Option<Vec<String>>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Parse { resume } => {
            let profile = parse_resume(&resume, &config).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }

        Commands::Recommend {
            resume,
            top,
            output,
            save,
            detailed,
            catalog,
        } => {
            let output_format = resolve_format(output.as_deref(), &config)?;
            let top_n = resolve_top(top, &config)?;
            let catalog = load_catalog(catalog.as_deref(), &config)?;
            let engine = RecommendationEngine::new(&catalog, config.scoring.clone());

            println!("🧭 Career path analysis");
            println!("📄 Resume: {}", resume.display());
            println!("💼 Job profiles: {}", catalog.jobs().len());

            let started = Instant::now();
            let profile = parse_resume(&resume, &config).await?;
            println!(
                "🔍 Found {} skills in {} categories",
                profile.skills.total(),
                profile.skills.len()
            );

            let analysis = engine.recommend(&profile, top_n);
            let report = CareerReport::new(
                profile,
                analysis,
                Some(resume.as_path()),
                started.elapsed().as_millis() as u64,
                catalog.jobs().len(),
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let content = generator.generate_report(&report, output_format)?;
            emit(&content, save.as_deref())?;
        }

        Commands::Analyze { skills, top, output } => {
            let output_format = resolve_format(output.as_deref(), &config)?;
            let top_n = resolve_top(top, &config)?;
            let catalog = load_catalog(None, &config)?;
            let engine = RecommendationEngine::new(&catalog, config.scoring.clone());

            let started = Instant::now();
            let content = tokio::fs::read_to_string(&skills).await?;
            let input: SkillsInput = serde_json::from_str(&content)?;
            info!("Analyzing {} skills from {}", input.skills.total(), skills.display());

            let has_experience = input.experience.is_some();
            let profile = CandidateProfile {
                name: input.name,
                email: input.email,
                phone: input.phone,
                skills: input.skills,
                experience: input.experience.unwrap_or_default(),
                ..CandidateProfile::default()
            };

            let context = has_experience.then_some(profile.experience.as_slice());
            let analysis = engine.recommend_with_context(&profile, top_n, context);
            let report = CareerReport::new(
                profile,
                analysis,
                Some(skills.as_path()),
                started.elapsed().as_millis() as u64,
                catalog.jobs().len(),
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                config.output.detailed,
                true,
                true,
                true,
            );
            println!("{}", generator.generate_report(&report, output_format)?);
        }

        Commands::Batch { files, top } => {
            let top_n = resolve_top(top, &config)?;
            let catalog = load_catalog(None, &config)?;
            let engine = RecommendationEngine::new(&catalog, config.scoring.clone());
            let mut input_manager = InputManager::new();

            let progress = ProgressBar::new(files.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );

            let mut rows = Vec::with_capacity(files.len());
            for file in &files {
                progress.set_message(file.display().to_string());

                let text = input_manager.extract_text_or_empty(file).await;
                let profile =
                    parse_with(&text, shared_recognizer(), config.extraction.raw_excerpt_chars);
                let analysis = engine.recommend(&profile, top_n);
                rows.push((file.clone(), profile.name, analysis.recommendations.into_iter().next()));

                progress.inc(1);
            }
            progress.finish_and_clear();

            println!("📊 Best match per resume\n");
            for (file, name, best) in rows {
                let who = name.unwrap_or_else(|| display_name(&file));
                match best {
                    Some(best) => println!(
                        "  {:<30} {:<35} {:>6.2}%",
                        who, best.job_title, best.match_score
                    ),
                    None => println!("  {:<30} {:<35}", who, "no job profiles"),
                }
            }
        }

        Commands::Profiles { sector } => {
            let catalog = load_catalog(None, &config)?;

            let jobs: Vec<_> = catalog
                .jobs()
                .iter()
                .filter(|job| {
                    sector
                        .as_deref()
                        .map_or(true, |s| job.sector.eq_ignore_ascii_case(s))
                })
                .collect();

            if jobs.is_empty() {
                return Err(CareerPathError::InvalidInput(format!(
                    "No job profiles for sector '{}'. Known sectors: {}",
                    sector.unwrap_or_default(),
                    catalog.sectors().join(", ")
                )));
            }

            println!("💼 Job profiles ({})\n", jobs.len());
            let mut current_sector = "";
            for job in jobs {
                if job.sector != current_sector {
                    current_sector = &job.sector;
                    println!("{}:", current_sector);
                }
                println!("  {:<35} {}", job.title, job.required_skills.join(", "));
            }
        }

        Commands::Resources => {
            let catalog = load_catalog(None, &config)?;
            let skills = catalog.resource_skills();

            println!("📚 Curated learning resources ({} skills)\n", skills.len());
            for skill in skills {
                println!("  • {}", skill);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    CareerPathError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

/// Validate the resume path and parse it, treating unreadable content as empty.
async fn parse_resume(resume: &Path, config: &Config) -> Result<CandidateProfile> {
    cli::validate_file_extension(resume, RESUME_EXTENSIONS)
        .map_err(|e| CareerPathError::InvalidInput(format!("Resume file: {}", e)))?;

    if !resume.exists() {
        return Err(CareerPathError::InvalidInput(format!(
            "File does not exist: {}",
            resume.display()
        )));
    }

    let text = InputManager::new().extract_text_or_empty(resume).await;
    Ok(parse_with(
        &text,
        shared_recognizer(),
        config.extraction.raw_excerpt_chars,
    ))
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(CareerPathError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn resolve_top(top: Option<usize>, config: &Config) -> Result<usize> {
    match top.unwrap_or(config.recommendations.top_n) {
        0 => Err(CareerPathError::InvalidInput(
            "--top must be at least 1".to_string(),
        )),
        n => Ok(n),
    }
}

/// The catalog named on the command line, else the configured one, else the built-in.
fn load_catalog(path: Option<&Path>, config: &Config) -> Result<Catalog> {
    match path.or(config.recommendations.catalog_path.as_deref()) {
        Some(path) => Catalog::from_file(path),
        None => Ok(Catalog::builtin().clone()),
    }
}

fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, path)?;
            println!("✅ Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn display_name(file: &Path) -> String {
    file.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| file.display().to_string())
}
