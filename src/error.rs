use std::path::PathBuf;

use thiserror::Error;

/// The first rule a configuration violates. `Display` is the message shown
/// to the user next to the generate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Textbox title is required.")]
    MissingTitle,
    #[error("Textbox content is required.")]
    MissingContent,
    #[error("Image URL is required when using an image background.")]
    MissingImageUrl,
    #[error("Invalid image URL format.")]
    InvalidImageUrl,
    #[error("Both gradient colors are required.")]
    MissingGradientColors,
}

/// Errors loading a configuration from disk or from a flag value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

/// Rejected editor-session edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("gradient color index {0} out of range (expected 0 or 1)")]
    GradientIndex(usize),
    #[error("palette colors are not available in the simple variant")]
    NoPalette,
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
