//! Writes the generated client to disk.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

/// Output path relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "services/api.ts";

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// `services/api.ts` under `dir`.
pub fn default_output_path(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_OUTPUT)
}

/// Write `text` to `path`, creating parent directories and replacing any
/// existing file.
pub async fn write_output(path: &Path, text: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!(dir = %parent.display(), "Ensuring output directory exists.");
        fs::create_dir_all(parent)
            .await
            .map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::write(path, text)
        .await
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), bytes = text.len(), "Wrote generated client.");
    Ok(())
}
