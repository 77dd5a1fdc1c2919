//! File storage for app configuration.
//!
//! Directory structure:
//! ~/.eventy/
//!   config.yaml          # Endpoint overrides
//!   eventy.log           # Rotating log file
//!
//! Drafts are deliberately not persisted; a draft lives only for the session
//! that created it.

use std::fs;
use std::path::PathBuf;

/// Configuration stored in config.yaml. Every field is optional; missing
/// entries fall back to the built-in endpoints.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the Eventy platform API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Base URL of the Nominatim geocoding service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominatim_url: Option<String>,
}

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

/// Manages the data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default data directory path (~/.eventy/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".eventy")
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    pub fn config_exists(&self) -> bool {
        self.config_path().exists()
    }

    /// Create the data directory if it is missing
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load the config file. A missing file is not an error.
    pub fn load_config(&self) -> Result<AppConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        // An empty file (the freshly written default) means no overrides.
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Save the config file
    pub fn save_config(&self, config: &AppConfig) -> Result<(), StorageError> {
        if !self.exists() {
            self.init()?;
        }

        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().join("eventy"));
        let config = storage.load_config().unwrap();
        assert!(config.api_url.is_none());
        assert!(config.nominatim_url.is_none());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().join("eventy"));
        let config = AppConfig {
            api_url: Some("https://staging.example.com".to_string()),
            nominatim_url: None,
        };
        storage.save_config(&config).unwrap();
        assert!(storage.exists());

        let loaded = storage.load_config().unwrap();
        assert_eq!(
            loaded.api_url.as_deref(),
            Some("https://staging.example.com")
        );
        assert!(loaded.nominatim_url.is_none());
    }

    #[test]
    fn test_first_run_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().join("eventy"));
        assert!(!storage.config_exists());

        storage.save_config(&AppConfig::default()).unwrap();
        assert!(storage.config_exists());
        let loaded = storage.load_config().unwrap();
        assert!(loaded.api_url.is_none());
        assert!(loaded.nominatim_url.is_none());
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        fs::write(dir.path().join("config.yaml"), "api_url: [not: a: string").unwrap();
        assert!(matches!(
            storage.load_config(),
            Err(StorageError::Parse(_))
        ));
    }
}
