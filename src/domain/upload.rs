use std::path::Path;

const MAX_EXTENSION_CHARS: usize = 8;

/// Raw audio bytes received from the upload transport, together with the
/// client-supplied filename. The filename is never used for on-disk path
/// construction; only its extension survives, sanitized.
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub original_name: String,
    pub data: Vec<u8>,
}

impl UploadedAudio {
    pub fn new(original_name: String, data: Vec<u8>) -> Self {
        Self {
            original_name,
            data,
        }
    }

    /// Extension of the client-supplied name reduced to lowercase ASCII
    /// alphanumerics, falling back to `bin` when nothing usable remains.
    pub fn sanitized_extension(&self) -> String {
        let extension = Path::new(&self.original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let cleaned: String = extension
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(MAX_EXTENSION_CHARS)
            .collect();

        if cleaned.is_empty() {
            "bin".to_string()
        } else {
            cleaned.to_lowercase()
        }
    }
}
