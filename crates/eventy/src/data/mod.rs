pub mod storage;

pub use storage::{AppConfig, DataDirectory, StorageError};
