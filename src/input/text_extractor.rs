//! Text extraction from resume files

use crate::error::{CareerPathError, Result};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            CareerPathError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Page breaks come through as form feeds
        Ok(text.replace('\u{c}', "\n"))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(Self::render(&markdown))
    }
}

impl MarkdownExtractor {
    /// Render Markdown to plain text, one block per line. List items keep a
    /// `•` marker so they still read as bullets.
    pub fn render(markdown: &str) -> String {
        let mut html_output = String::new();
        html::push_html(&mut html_output, Parser::new(markdown));
        Self::html_to_text(&html_output)
    }

    fn html_to_text(html: &str) -> String {
        let text = html
            .replace("<li>", "• ")
            .replace("<br />", "\n")
            .replace("</p>", "\n")
            .replace("&nbsp;", " ");

        let stripped = HTML_TAG.replace_all(&text, "");
        let decoded = stripped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        decoded
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_render() {
        let markdown = "# Jane Doe\n\njane@example.com\n\n## Experience\n\n\
                        **Software Engineer** | Acme | 2020-2022\n\n\
                        - Built APIs in *Rust* &amp; Go\n- Led a team of 4\n";

        let text = MarkdownExtractor::render(markdown);
        assert_eq!(
            text,
            "Jane Doe\njane@example.com\nExperience\n\
             Software Engineer | Acme | 2020-2022\n\
             • Built APIs in Rust & Go\n• Led a team of 4"
        );
    }

    #[test]
    fn test_escaped_markup_survives() {
        let text = MarkdownExtractor::render("Skills: C++ &lt;templates&gt;");
        assert_eq!(text, "Skills: C++ <templates>");
    }

    #[tokio::test]
    async fn test_plain_text_extract() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe\nPython").unwrap();

        let text = PlainTextExtractor.extract(&path).await.unwrap();
        assert_eq!(text, "Jane Doe\nPython");
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"not a pdf").unwrap();

        let err = PdfExtractor.extract(&path).await.unwrap_err();
        assert!(matches!(err, CareerPathError::PdfExtraction(_)));
    }
}
