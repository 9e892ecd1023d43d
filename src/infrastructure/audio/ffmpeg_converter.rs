use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioConverter, ConversionError};

/// Normalizes audio by shelling out to ffmpeg. `-y` makes the invocation
/// idempotent: a pre-existing output file is overwritten.
pub struct FfmpegConverter {
    binary: PathBuf,
}

impl FfmpegConverter {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfmpegConverter {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl AudioConverter for FfmpegConverter {
    async fn convert_to_wav(&self, input: &Path) -> Result<PathBuf, ConversionError> {
        if !input.exists() {
            return Err(ConversionError::InputNotFound(input.to_path_buf()));
        }

        // ffmpeg refuses in-place conversion, so a wav input gets a
        // distinct output stem instead of overwriting itself.
        let already_wav = input
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
        let output = if already_wav {
            input.with_extension("norm.wav")
        } else {
            input.with_extension("wav")
        };

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            "Converting audio to wav"
        );

        let result = Command::new(&self.binary)
            .arg("-i")
            .arg(input)
            .arg("-y")
            .arg(&output)
            .output()
            .await
            .map_err(|e| ConversionError::ConversionFailed(format!("spawn: {}", e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let detail = stderr.lines().last().unwrap_or("no stderr output");
            return Err(ConversionError::ConversionFailed(format!(
                "ffmpeg exited with {}: {}",
                result.status, detail
            )));
        }

        Ok(output)
    }
}
