//! Lesson sources: where lesson records come from
//!
//! A [`LessonSource`] plays the role of the course's external collaborator.
//! Given the architecture just taught and the one coming next, it returns the
//! next structured lesson record or a recoverable error. The bundled source
//! serves the authored curriculum; the record-directory source teaches from
//! JSON files parsed strictly as the record wire shape.

use std::fs;
use std::path::PathBuf;

use archademy_core::{Architecture, Lesson};

/// Error types for lesson source operations
#[derive(Debug)]
pub enum SourceError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io(msg) => write!(f, "IO error: {}", msg),
            SourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// A producer of lesson records.
///
/// `previous` is the architecture the student just finished; sources that
/// synthesize content use it to phrase the delta from the prior step. The
/// app imposes no validation on the result beyond the record shape itself.
pub trait LessonSource {
    fn generate(&self, previous: Architecture, next: Architecture) -> Result<Lesson, SourceError>;

    /// Short description for logging
    fn describe(&self) -> String;
}

/// Serves the complete curriculum bundled into the core crate
pub struct BundledSource;

impl LessonSource for BundledSource {
    fn generate(&self, _previous: Architecture, next: Architecture) -> Result<Lesson, SourceError> {
        Ok(archademy_core::library::lesson_for(next))
    }

    fn describe(&self) -> String {
        "bundled curriculum".to_string()
    }
}

/// Reads lesson records from `<dir>/<slug>.json`.
///
/// A missing or malformed record is a recoverable error; the caller keeps
/// the lesson currently on screen and surfaces a retryable notice.
pub struct RecordDirSource {
    dir: PathBuf,
}

impl RecordDirSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn record_path(&self, architecture: Architecture) -> PathBuf {
        self.dir.join(format!("{}.json", architecture.slug()))
    }
}

impl LessonSource for RecordDirSource {
    fn generate(&self, _previous: Architecture, next: Architecture) -> Result<Lesson, SourceError> {
        let path = self.record_path(next);
        let content = fs::read_to_string(&path).map_err(|e| {
            SourceError::Io(format!("Failed to read lesson record {:?}: {}", path, e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SourceError::Parse(format!("Failed to parse lesson record {:?}: {}", path, e))
        })
    }

    fn describe(&self) -> String {
        format!("lesson records in {:?}", self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archademy_core::library;

    #[test]
    fn test_bundled_source_serves_every_architecture() {
        let source = BundledSource;
        let mut previous = Architecture::RuleBased;
        for next in archademy_core::ROADMAP {
            let lesson = source
                .generate(previous, next)
                .expect("bundled source should be infallible");
            assert_eq!(lesson.id, next);
            previous = next;
        }
    }

    #[test]
    fn test_record_dir_source_round_trips_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let lesson = library::lesson_for(Architecture::ClassicalMl);
        let json = serde_json::to_string_pretty(&lesson).unwrap();
        std::fs::write(dir.path().join("classical_ml.json"), json).unwrap();

        let source = RecordDirSource::new(dir.path().to_path_buf());
        let loaded = source
            .generate(Architecture::RuleBased, Architecture::ClassicalMl)
            .unwrap();
        assert_eq!(loaded, lesson);
    }

    #[test]
    fn test_record_dir_source_reports_missing_record() {
        let dir = tempfile::tempdir().unwrap();
        let source = RecordDirSource::new(dir.path().to_path_buf());

        let err = source
            .generate(Architecture::RuleBased, Architecture::ClassicalMl)
            .unwrap_err();
        assert!(matches!(err, SourceError::Io(_)), "got {err:?}");
    }

    #[test]
    fn test_record_dir_source_reports_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("classical_ml.json"),
            r#"{"id": "Classical ML pipelines", "title": "2."}"#,
        )
        .unwrap();

        let source = RecordDirSource::new(dir.path().to_path_buf());
        let err = source
            .generate(Architecture::RuleBased, Architecture::ClassicalMl)
            .unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_record_missing_a_field_fails_to_parse() {
        let lesson = library::lesson_for(Architecture::Rag);
        let mut value: serde_json::Value = serde_json::to_value(&lesson).unwrap();
        value.as_object_mut().unwrap().remove("analogy");

        let result: Result<Lesson, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }
}
