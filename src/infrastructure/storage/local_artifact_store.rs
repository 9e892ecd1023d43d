use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{ArtifactStore, ArtifactStoreError, StoredArtifact};

/// Artifact store over a single base directory. Every stored file gets a
/// uuid stem, so names never collide and never derive from client input.
/// No automatic eviction; the directory is operator-managed.
pub struct LocalArtifactStore {
    base_dir: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, ArtifactStoreError> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }
}

fn valid_extension(extension: &str) -> bool {
    !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric())
}

fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && !name.contains("..")
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn store(
        &self,
        extension: &str,
        data: &[u8],
    ) -> Result<StoredArtifact, ArtifactStoreError> {
        if !valid_extension(extension) {
            return Err(ArtifactStoreError::InvalidName(extension.to_string()));
        }

        let name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.base_dir.join(&name);

        tokio::fs::write(&path, data).await?;

        tracing::debug!(name = %name, bytes = data.len(), "Artifact stored");

        Ok(StoredArtifact { name, path })
    }

    async fn fetch(&self, name: &str) -> Result<Vec<u8>, ArtifactStoreError> {
        if !valid_name(name) {
            return Err(ArtifactStoreError::InvalidName(name.to_string()));
        }

        let path = self.base_dir.join(name);

        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ArtifactStoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(ArtifactStoreError::Io(e)),
        }
    }
}
