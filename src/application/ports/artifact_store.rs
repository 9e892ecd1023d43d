use std::path::PathBuf;

use async_trait::async_trait;

/// Handle to a stored ephemeral audio artifact. `name` is the
/// server-generated identifier clients use to retrieve it; `path` is where
/// it lives on disk for local processing (ffmpeg needs a real path).
#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub name: String,
    pub path: PathBuf,
}

/// Store for ephemeral audio artifacts (uploads, normalized audio, spoken
/// questions). Names are always server-generated; client-supplied filenames
/// never reach the filesystem.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes `data` under a fresh server-generated name carrying the given
    /// extension.
    async fn store(&self, extension: &str, data: &[u8])
        -> Result<StoredArtifact, ArtifactStoreError>;

    /// Reads back a previously stored artifact by name.
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("invalid artifact name: {0}")]
    InvalidName(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
