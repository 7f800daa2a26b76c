//! Path management for finflow
//!
//! Provides XDG-compliant path resolution for the configuration file.
//!
//! ## Path Resolution Order
//!
//! 1. `FINFLOW_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finflow` or `~/.config/finflow`
//! 3. Windows: `%APPDATA%\finflow`

use std::path::PathBuf;

use crate::error::FinflowError;

/// Manages all paths used by finflow
#[derive(Debug, Clone)]
pub struct FinflowPaths {
    /// Base directory for all finflow data
    base_dir: PathBuf,
}

impl FinflowPaths {
    /// Create a new FinflowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FinflowError> {
        let base_dir = if let Ok(custom) = std::env::var("FINFLOW_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FinflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/finflow/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinflowError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if finflow has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinflowError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    FinflowError::Config("Cannot determine home directory".to_string())
                })
        })?;

    Ok(config_base.join("finflow"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinflowError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinflowError::Config("Cannot determine APPDATA directory".to_string()))?;

    Ok(PathBuf::from(appdata).join("finflow"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let paths = FinflowPaths::with_base_dir(PathBuf::from("/tmp/finflow-test"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/finflow-test"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/finflow-test/config.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        std::fs::write(paths.settings_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}
