//! Optional on-disk persistence of fetched frames.
//!
//! Raw fetched bytes are written verbatim, one file per successfully
//! decoded frame, named by UTC timestamp with microsecond precision.
//! Collisions are not expected at that resolution and overwrite silently.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

/// Extension for persisted frames; bytes are written verbatim regardless of
/// the actual wire format.
const FRAME_FILE_EXT: &str = "jpg";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write frame to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes fetched frames into a configured directory, or does nothing at
/// all when no directory was configured.
#[derive(Debug)]
pub struct FramePersister {
    directory: Option<PathBuf>,
}

impl FramePersister {
    /// Persistence off: `save` performs zero filesystem work.
    pub fn disabled() -> Self {
        Self { directory: None }
    }

    /// Persistence into `directory`, creating it (single level) if missing.
    pub fn with_directory(directory: PathBuf) -> Result<Self, PersistError> {
        match fs::create_dir(&directory) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(source) => {
                return Err(PersistError::CreateDir {
                    path: directory,
                    source,
                });
            }
        }
        Ok(Self {
            directory: Some(directory),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.directory.is_some()
    }

    /// Write `bytes` under a fresh timestamp filename. Returns the path
    /// written, or `None` when persistence is disabled.
    pub fn save(&self, bytes: &[u8]) -> Result<Option<PathBuf>, PersistError> {
        let Some(directory) = &self.directory else {
            return Ok(None);
        };
        let path = directory.join(timestamp_filename());
        fs::write(&path, bytes).map_err(|source| PersistError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    }
}

/// `YYYY-MM-DDThh:mm:ss.ffffffZ.<ext>` in UTC.
fn timestamp_filename() -> String {
    format!(
        "{}.{}",
        Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ"),
        FRAME_FILE_EXT
    )
}
