//! Error handling for the CV matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, CvMatcherError>;

/// Zip archive errors only surface while reading DOCX containers
impl From<zip::result::ZipError> for CvMatcherError {
    fn from(err: zip::result::ZipError) -> Self {
        CvMatcherError::DocxExtraction(err.to_string())
    }
}
