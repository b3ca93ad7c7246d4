use std::path::PathBuf;
use thiserror::Error;

/// Result type for dicomtab operations
pub type Result<T> = std::result::Result<T, DicomtabError>;

/// Whole-run error conditions
///
/// Per-file problems never surface here; they are classified into
/// [`ParseOutcome`](crate::decoder::ParseOutcome) and
/// [`IntensityMetric`](crate::extraction::IntensityMetric) where they occur.
#[derive(Error, Debug)]
pub enum DicomtabError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Input path does not reference an existing directory
    #[error("Not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    /// Interactive input ended before a usable directory was entered
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// Requested output needs a cargo feature this build lacks
    #[error("{format} output requires the '{feature}' feature (rebuild with: cargo build --features {feature})")]
    FeatureDisabled {
        format: &'static str,
        feature: &'static str,
    },

    /// CSV serialization error
    #[error("Export error: {0}")]
    ExportError(#[from] csv::Error),

    /// JSON serialization error
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for DicomtabError {
    fn from(e: dicom_object::ReadError) -> Self {
        DicomtabError::DicomError(format!("{}", e))
    }
}
