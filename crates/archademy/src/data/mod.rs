pub mod storage;

pub use storage::{DataDirectory, ProgressData, StorageError};
