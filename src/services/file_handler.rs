//! File access for Marcador.
//!
//! Thin async wrapper over `tokio::fs` used by the bookmark manager. The
//! parser and serializer only ever see in-memory text; every path touch goes
//! through here.

use std::path::Path;

use tracing::debug;

use crate::types::errors::FileError;

/// Async text-file reader/writer.
#[derive(Debug, Default)]
pub struct FileHandler;

impl FileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file to a string. Fails with [`FileError::NotFound`] when the
    /// path does not exist.
    pub async fn read(&self, path: impl AsRef<Path>) -> Result<String, FileError> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(FileError::NotFound(path.display().to_string()));
        }

        tokio::fs::read_to_string(path)
            .await
            .map_err(|err| FileError::ReadFailed(err.to_string()))
    }

    /// Writes a string to a file, creating parent directories as needed.
    pub async fn write(&self, path: impl AsRef<Path>, content: &str) -> Result<(), FileError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| FileError::WriteFailed(err.to_string()))?;
            }
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|err| FileError::WriteFailed(err.to_string()))?;
        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    /// Deletes a file.
    pub async fn delete(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        tokio::fs::remove_file(path.as_ref())
            .await
            .map_err(|err| FileError::DeleteFailed(err.to_string()))
    }
}
