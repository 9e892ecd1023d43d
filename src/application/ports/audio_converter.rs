use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Normalizes an uploaded audio file into the linear-PCM WAV container the
/// speech recognizer accepts. The output path is the input path with its
/// extension replaced by `wav`; any pre-existing file there is overwritten.
/// The input file is left in place.
#[async_trait]
pub trait AudioConverter: Send + Sync {
    async fn convert_to_wav(&self, input: &Path) -> Result<PathBuf, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("input file does not exist: {0}")]
    InputNotFound(PathBuf),
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
}
