//! Output formatters for career reports

use crate::config::OutputFormat;
use crate::error::{CareerPathError, Result};
use crate::output::report::{CareerReport, MatchBand};
use crate::recommend::MatchResult;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting career reports
pub trait OutputFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Career Report - {{ candidate }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .job {
            border-left: 4px solid #007acc;
            padding: 10px 15px;
            margin: 15px 0;
            background: #f8f9fa;
        }
        .score-badge {
            display: inline-block;
            padding: 4px 12px;
            border-radius: 16px;
            font-weight: bold;
            color: white;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .missing { color: #dc3545; }
        table { border-collapse: collapse; width: 100%; }
        td, th { border: 1px solid #dee2e6; padding: 6px 10px; text-align: left; }
        .metadata { font-size: 0.9em; color: #6c757d; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Career Report</h1>
            <p><strong>{{ candidate }}</strong>{% if has_email %} | {{ email }}{% endif %}</p>
        </div>

        <div class="section">
            <h2>Top Career Matches</h2>
            {% for job in jobs %}
            <div class="job">
                <h3>{{ job.rank }}. {{ job.title }} <span class="score-badge {{ job.score_class }}">{{ job.score }}%</span></h3>
                <p>{{ job.description }}</p>
                <p><strong>Sector:</strong> {{ job.sector }}</p>
                {% if job.has_missing %}
                <p class="missing"><strong>Missing skills:</strong> {{ job.missing }}</p>
                {% endif %}
            </div>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Skill Analysis</h2>
            <p><strong>Total skills:</strong> {{ total_skills }} | <strong>Strongest category:</strong> {{ strongest }} | <strong>Diversity:</strong> {{ diversity }}</p>
            <table>
                <tr><th>Category</th><th>Skills</th></tr>
                {% for row in skill_rows %}
                <tr><td>{{ row.category }}</td><td>{{ row.skills }}</td></tr>
                {% endfor %}
            </table>
        </div>

        <div class="section">
            <h2>Career Advice</h2>
            <p>{{ current_position }}</p>
            <ul>
                {% for step in next_steps %}
                <li>{{ step }}</li>
                {% endfor %}
                {% for gap in skill_gaps %}
                <li>{{ gap }}</li>
                {% endfor %}
                {% for insight in market_insights %}
                <li>{{ insight }}</li>
                {% endfor %}
            </ul>
        </div>

        {% if has_learning_plan %}
        <div class="section">
            <h2>Learning Plan</h2>
            {% for item in learning %}
            <h3>{{ item.skill }}</h3>
            <ul>
                {% for course in item.courses %}
                <li>Course: {{ course }}</li>
                {% endfor %}
                {% for book in item.books %}
                <li>Book: {{ book }}</li>
                {% endfor %}
                {% for practice in item.practice %}
                <li>Practice: {{ practice }}</li>
                {% endfor %}
            </ul>
            {% endfor %}
        </div>
        {% endif %}

        <div class="metadata">
            <p>Generated by careerpath v{{ version }} on {{ generated_at }} in {{ processing_time }}ms</p>
            <p>{{ catalog_profiles }} job profiles scored{% if has_source %} | Source: {{ source_file }}{% endif %}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    candidate: String,
    email: String,
    has_email: bool,
    jobs: Vec<HtmlJob>,
    total_skills: usize,
    strongest: String,
    diversity: String,
    skill_rows: Vec<HtmlSkillRow>,
    current_position: String,
    next_steps: Vec<String>,
    skill_gaps: Vec<String>,
    market_insights: Vec<String>,
    learning: Vec<HtmlLearningItem>,
    has_learning_plan: bool,
    version: String,
    generated_at: String,
    processing_time: u64,
    catalog_profiles: usize,
    source_file: String,
    has_source: bool,
}

struct HtmlJob {
    rank: usize,
    title: String,
    description: String,
    sector: String,
    score: String,
    score_class: &'static str,
    missing: String,
    has_missing: bool,
}

struct HtmlSkillRow {
    category: String,
    skills: String,
}

struct HtmlLearningItem {
    skill: String,
    courses: Vec<String>,
    books: Vec<String>,
    practice: Vec<String>,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let band = MatchBand::from_score(score);
        let color = match band {
            MatchBand::Excellent => Color::Green,
            MatchBand::Good => Color::BrightGreen,
            MatchBand::Fair => Color::Yellow,
            MatchBand::Weak => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn format_match(&self, rank: usize, job: &MatchResult) -> String {
        let mut output = format!(
            "{}. {} ({}) {:.2}% {}\n",
            rank,
            self.colorize(&job.job_title, Color::Cyan),
            job.sector,
            job.match_score,
            self.format_score_badge(job.match_score)
        );

        if self.detailed {
            output.push_str(&format!("   {}\n", job.description));
        }

        if job.missing_skills.is_empty() {
            output.push_str(&format!("   {}\n", self.colorize("✓ No missing skills", Color::Green)));
        } else {
            output.push_str(&format!(
                "   Missing: {}\n",
                self.colorize(&job.missing_skills.join(", "), Color::Red)
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String> {
        let profile = &report.parsed_resume;
        let analysis = &report.career_analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("🧭 CAREER PATH REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        // Candidate
        output.push_str(&self.format_header("Candidate", 2));
        output.push_str(&format!("Name: {}\n", self.colorize(&report.candidate_label(), Color::Cyan)));
        if let Some(email) = &profile.email {
            output.push_str(&format!("Email: {}\n", email));
        }
        if let Some(phone) = &profile.phone {
            output.push_str(&format!("Phone: {}\n", phone));
        }

        // Matches
        output.push_str(&self.format_header("Top Career Matches", 2));
        if analysis.recommendations.is_empty() {
            output.push_str("No job profiles to compare against.\n");
        }
        for (i, job) in analysis.recommendations.iter().enumerate() {
            output.push_str(&self.format_match(i + 1, job));
        }

        // Skills
        let skills = &analysis.skill_analysis;
        output.push_str(&self.format_header("Skill Analysis", 2));
        output.push_str(&format!(
            "Total skills: {} across {} categories (diversity {:.2})\n",
            skills.total_skills,
            skills.skill_categories.len(),
            skills.skill_diversity_score
        ));
        if let Some(strongest) = &skills.strongest_category {
            output.push_str(&format!("Strongest category: {}\n", self.colorize(strongest, Color::Green)));
        }
        for (category, list) in profile.skills.iter() {
            output.push_str(&format!("  • {}: {}\n", category, list.join(", ")));
        }

        // Advice
        let advice = &analysis.personalized_advice;
        output.push_str(&self.format_header("Career Advice", 2));
        output.push_str(&format!("{}\n", self.colorize(&advice.current_position, Color::Cyan)));
        for step in &advice.next_steps {
            output.push_str(&format!("  → {}\n", step));
        }
        for gap in &advice.skill_gaps {
            output.push_str(&format!("  ⚠ {}\n", gap));
        }
        for insight in &advice.market_insights {
            output.push_str(&format!("  💡 {}\n", insight));
        }

        if self.detailed {
            if !analysis.learning_plan.is_empty() {
                output.push_str(&self.format_header("Learning Plan", 3));
                for (skill, resources) in &analysis.learning_plan {
                    output.push_str(&format!("{}\n", self.colorize(skill, Color::Yellow)));
                    for course in &resources.courses {
                        output.push_str(&format!("  📚 {}\n", course));
                    }
                    for book in &resources.books {
                        output.push_str(&format!("  📖 {}\n", book));
                    }
                    if !resources.practice.is_empty() {
                        output.push_str(&format!("  🛠  {}\n", resources.practice.join(", ")));
                    }
                }
            }

            if !profile.experience.is_empty() {
                output.push_str(&self.format_header("Experience", 3));
                for line in &profile.experience {
                    output.push_str(&format!("  {}\n", line));
                }
            }

            if !profile.education.is_empty() {
                output.push_str(&self.format_header("Education", 3));
                for line in &profile.education {
                    output.push_str(&format!("  {}\n", line));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &CareerReport) -> HtmlTemplate {
        let profile = &report.parsed_resume;
        let analysis = &report.career_analysis;

        let jobs = analysis
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, job)| HtmlJob {
                rank: i + 1,
                title: job.job_title.clone(),
                description: job.description.clone(),
                sector: job.sector.clone(),
                score: format!("{:.2}", job.match_score),
                score_class: match MatchBand::from_score(job.match_score) {
                    MatchBand::Excellent => "score-excellent",
                    MatchBand::Good => "score-good",
                    MatchBand::Fair => "score-fair",
                    MatchBand::Weak => "score-poor",
                },
                missing: job.missing_skills.join(", "),
                has_missing: !job.missing_skills.is_empty(),
            })
            .collect();

        let skill_rows = profile
            .skills
            .iter()
            .map(|(category, list)| HtmlSkillRow {
                category: category.to_string(),
                skills: list.join(", "),
            })
            .collect();

        let learning: Vec<HtmlLearningItem> = analysis
            .learning_plan
            .iter()
            .map(|(skill, resources)| HtmlLearningItem {
                skill: skill.clone(),
                courses: resources.courses.clone(),
                books: resources.books.clone(),
                practice: resources.practice.clone(),
            })
            .collect();

        let advice = &analysis.personalized_advice;
        let skills = &analysis.skill_analysis;

        HtmlTemplate {
            include_styles: self.include_styles,
            candidate: report.candidate_label(),
            email: profile.email.clone().unwrap_or_default(),
            has_email: profile.email.is_some(),
            jobs,
            total_skills: skills.total_skills,
            strongest: skills
                .strongest_category
                .clone()
                .unwrap_or_else(|| "none".to_string()),
            diversity: format!("{:.2}", skills.skill_diversity_score),
            skill_rows,
            current_position: advice.current_position.clone(),
            next_steps: advice.next_steps.clone(),
            skill_gaps: advice.skill_gaps.clone(),
            market_insights: advice.market_insights.clone(),
            has_learning_plan: !learning.is_empty(),
            learning,
            version: report.metadata.tool_version.clone(),
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            processing_time: report.metadata.processing_time_ms,
            catalog_profiles: report.metadata.catalog_profiles,
            source_file: report.metadata.source_file.clone().unwrap_or_default(),
            has_source: report.metadata.source_file.is_some(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| CareerPathError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: f64) -> &'static str {
        match MatchBand::from_score(score) {
            MatchBand::Excellent => "🟢",
            MatchBand::Good => "🔵",
            MatchBand::Fair => "🟡",
            MatchBand::Weak => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &CareerReport) -> Result<String> {
        let profile = &report.parsed_resume;
        let analysis = &report.career_analysis;
        let mut output = String::new();

        output.push_str(&format!("# 🧭 Career Report: {}\n\n", report.candidate_label()));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms | **Profiles scored:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms,
                report.metadata.catalog_profiles
            ));
            if let Some(source) = &report.metadata.source_file {
                let name = Path::new(source)
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| source.clone());
                output.push_str(&format!("**Source:** `{}`\n", name));
            }
            output.push('\n');
        }

        output.push_str("## Top Career Matches\n\n");
        output.push_str("| # | Role | Sector | Score | Missing Skills |\n");
        output.push_str("|---|------|--------|-------|----------------|\n");
        for (i, job) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {:.2}% {} | {} |\n",
                i + 1,
                job.job_title,
                job.sector,
                job.match_score,
                Self::markdown_score_badge(job.match_score),
                if job.missing_skills.is_empty() {
                    "-".to_string()
                } else {
                    job.missing_skills.join(", ")
                }
            ));
        }
        output.push('\n');

        let skills = &analysis.skill_analysis;
        output.push_str("## Skill Analysis\n\n");
        output.push_str(&format!(
            "- **Total skills:** {}\n- **Categories:** {}\n- **Strongest category:** {}\n- **Diversity score:** {:.2}\n",
            skills.total_skills,
            skills.skill_categories.len(),
            skills.strongest_category.as_deref().unwrap_or("none"),
            skills.skill_diversity_score
        ));
        if !skills.in_demand_skills.is_empty() {
            output.push_str(&format!(
                "- **In-demand skills:** {}\n",
                skills.in_demand_skills.join(", ")
            ));
        }
        output.push('\n');

        if !profile.skills.is_empty() {
            output.push_str("| Category | Skills |\n|----------|--------|\n");
            for (category, list) in profile.skills.iter() {
                output.push_str(&format!("| {} | {} |\n", category, list.join(", ")));
            }
            output.push('\n');
        }

        let advice = &analysis.personalized_advice;
        output.push_str("## Career Advice\n\n");
        output.push_str(&format!("{}\n\n", advice.current_position));
        for step in &advice.next_steps {
            output.push_str(&format!("- {}\n", step));
        }
        for gap in &advice.skill_gaps {
            output.push_str(&format!("- ⚠️ {}\n", gap));
        }
        for insight in &advice.market_insights {
            output.push_str(&format!("- 💡 {}\n", insight));
        }
        output.push('\n');

        if !analysis.learning_plan.is_empty() {
            output.push_str("## Learning Plan\n\n");
            for (skill, resources) in &analysis.learning_plan {
                output.push_str(&format!("### {}\n\n", skill));
                for course in &resources.courses {
                    output.push_str(&format!("- 📚 {}\n", course));
                }
                for book in &resources.books {
                    output.push_str(&format!("- 📖 {}\n", book));
                }
                for practice in &resources.practice {
                    output.push_str(&format!("- 🛠️ {}\n", practice));
                }
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &CareerReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, source: &str, timestamp: bool) -> String {
    let base_name = Path::new(source)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "resume".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_career{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{parse, CandidateProfile};
    use crate::recommend::RecommendationEngine;
    use tempfile::TempDir;

    fn sample_report() -> CareerReport {
        let profile = parse(
            "Jane Doe\njane@example.com\nSkills: Python, SQL, Machine Learning, Tableau\n\
             Experience\nData Scientist | Globex | 2019-2023\n",
        );
        let analysis = RecommendationEngine::default().recommend(&profile, 3);
        CareerReport::new(profile, analysis, Some(Path::new("jane.txt")), 12, 65)
    }

    #[test]
    fn test_console_without_colors() {
        let report = sample_report();
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(output.contains("CAREER PATH REPORT"));
        assert!(output.contains("Name: Jane Doe"));
        assert!(output.contains("1. Data Scientist (technology)"));
        assert!(output.contains("Learning Plan"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_round_trips() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();

        let back: CareerReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.parsed_resume, report.parsed_resume);
        assert_eq!(back.career_analysis, report.career_analysis);
    }

    #[test]
    fn test_markdown_sections() {
        let output = MarkdownFormatter::new(true).format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# 🧭 Career Report: Jane Doe"));
        assert!(output.contains("**Source:** `jane.txt`"));
        assert!(output.contains("| 1 | Data Scientist | technology |"));
        assert!(output.contains("## Learning Plan"));
    }

    #[test]
    fn test_html_escapes_content() {
        let mut report = sample_report();
        report.parsed_resume.name = Some("<script>alert(1)</script>".to_string());

        let html = HtmlFormatter::new(false).format_report(&report).unwrap();
        assert!(html.contains("Top Career Matches"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_empty_report_formats() {
        let profile = CandidateProfile::default();
        let analysis = RecommendationEngine::default().recommend(&profile, 1);
        let report = CareerReport::new(profile, analysis, None, 0, 65);

        let generator = ReportGenerator::with_options(false, true, true, true, true);
        for format in [
            OutputFormat::Console,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Html,
        ] {
            assert!(!generator.generate_report(&report, format).unwrap().is_empty());
        }
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(OutputFormat::Markdown, "cv/jane_doe.pdf", false),
            "jane_doe_career.md"
        );
        assert_eq!(suggest_filename(OutputFormat::Json, "", false), "resume_career.json");
        assert!(suggest_filename(OutputFormat::Html, "a.txt", true).ends_with(".html"));
    }

    #[test]
    fn test_save_report_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("out.md");

        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }
}
