//! Data directory layout and study-progress persistence
//!
//! Directory structure:
//! ~/.archademy/
//!   progress.yaml        # Current roadmap position
//!   archademy.log        # Rotating application log

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Study position persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressData {
    /// Zero-based index into the architecture roadmap
    pub current_step: usize,
    /// Date of the last advance
    pub updated: jiff::civil::Date,
}

impl Default for ProgressData {
    fn default() -> Self {
        Self {
            current_step: 0,
            updated: jiff::Zoned::now().date(),
        }
    }
}

impl ProgressData {
    pub fn at_step(current_step: usize) -> Self {
        Self {
            current_step,
            updated: jiff::Zoned::now().date(),
        }
    }
}

/// Manages the data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn progress_path(&self) -> PathBuf {
        self.root.join("progress.yaml")
    }

    /// Initialize the data directory structure
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load the progress file, falling back to step 0 when it is missing
    /// or unreadable
    pub fn load_progress(&self) -> ProgressData {
        let path = self.progress_path();
        if !path.exists() {
            return ProgressData::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read progress file {:?}: {}", path, e);
                return ProgressData::default();
            }
        };

        match serde_saphyr::from_str(&content) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::warn!("Failed to parse progress file {:?}: {}", path, e);
                ProgressData::default()
            }
        }
    }

    /// Save the progress file
    pub fn save_progress(&self, progress: &ProgressData) -> Result<(), StorageError> {
        self.init()?;

        let yaml = serde_saphyr::to_string(progress)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize progress: {}", e)))?;

        fs::write(self.progress_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write progress: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_round_trips_through_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        let progress = ProgressData::at_step(4);
        storage.save_progress(&progress).unwrap();

        let loaded = storage.load_progress();
        assert_eq!(loaded, progress);
    }

    #[test]
    fn test_missing_progress_defaults_to_step_zero() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        assert_eq!(storage.load_progress().current_step, 0);
    }

    #[test]
    fn test_corrupt_progress_falls_back_to_step_zero() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        storage.init().unwrap();
        fs::write(dir.path().join("progress.yaml"), "current_step: [not a number").unwrap();

        assert_eq!(storage.load_progress().current_step, 0);
    }

    #[test]
    fn test_save_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let storage = DataDirectory::new(nested.clone());

        storage.save_progress(&ProgressData::at_step(1)).unwrap();
        assert!(nested.join("progress.yaml").exists());
    }
}
