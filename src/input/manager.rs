//! Input manager for resume files

use crate::error::{CareerPathError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(CareerPathError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text resume: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Rendering markdown resume: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(CareerPathError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    /// Extract text, treating any failure as an empty document.
    pub async fn extract_text_or_empty(&mut self, path: &Path) -> String {
        match self.extract_text(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not extract text from {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_cache_hits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "first").unwrap();

        let mut manager = InputManager::new();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "first");

        std::fs::write(&path, "second").unwrap();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "first");
        assert_eq!(manager.cache_size(), 1);

        manager.clear_cache();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn test_cache_disabled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# Jane Doe").unwrap();

        let mut manager = InputManager::new().with_cache(false);
        assert_eq!(manager.extract_text(&path).await.unwrap(), "Jane Doe");
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_errors() {
        let dir = TempDir::new().unwrap();
        let mut manager = InputManager::new();

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            manager.extract_text(&missing).await,
            Err(CareerPathError::InvalidInput(_))
        ));

        let docx = dir.path().join("resume.docx");
        std::fs::write(&docx, "binary").unwrap();
        assert!(matches!(
            manager.extract_text(&docx).await,
            Err(CareerPathError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_failures_become_empty_text() {
        let dir = TempDir::new().unwrap();
        let mut manager = InputManager::new();

        let text = manager
            .extract_text_or_empty(&dir.path().join("missing.pdf"))
            .await;
        assert!(text.is_empty());
    }
}
