use std::fmt;

/// Errors related to curriculum navigation and lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurriculumError {
    /// Tried to advance past the final roadmap entry
    EndOfRoadmap,
    /// An architecture identifier that is not part of the roadmap
    UnknownArchitecture(String),
}

impl fmt::Display for CurriculumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurriculumError::EndOfRoadmap => {
                write!(f, "already at the final architecture of the roadmap")
            }
            CurriculumError::UnknownArchitecture(name) => {
                write!(f, "unknown architecture {name:?}")
            }
        }
    }
}

impl std::error::Error for CurriculumError {}
