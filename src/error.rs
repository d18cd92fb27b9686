//! Error handling for the careerpath application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerPathError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CareerPathError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CareerPathError {
    fn from(err: anyhow::Error) -> Self {
        CareerPathError::AnalysisFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CareerPathError::UnsupportedFormat("resume.docx".to_string());
        assert_eq!(err.to_string(), "File format not supported: resume.docx");

        let err: CareerPathError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, CareerPathError::AnalysisFailed(_)));
    }
}
