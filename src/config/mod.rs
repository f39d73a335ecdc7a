//! Configuration management for the diario application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting today is
//! the snapshot directory the record files are read from.
//!
//! # Environment Variables
//!
//! - `DIARIO_DIR`: Path to the snapshot directory (defaults to ~/Documents/diario)
//! - `HOME`: Used for expanding the default snapshot directory path

use crate::constants::{DEFAULT_SNAPSHOT_SUBDIR, ENV_VAR_DIARIO_DIR, ENV_VAR_HOME};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the diario application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use diario::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     snapshot_dir: PathBuf::from("/path/to/snapshots"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory the record snapshots are read from.
    ///
    /// Loaded from the DIARIO_DIR environment variable with a fallback to
    /// ~/Documents/diario if not specified.
    pub snapshot_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("snapshot_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The snapshot directory path is expanded with `shellexpand` so `~` and
    /// environment variable references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The snapshot directory path expansion fails
    /// - The resulting path is empty
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use diario::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Snapshots at {:?}", config.snapshot_dir.exists()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let snapshot_dir_str = env::var(ENV_VAR_DIARIO_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_SNAPSHOT_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&snapshot_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let snapshot_dir = PathBuf::from(expanded_path.into_owned());

        if snapshot_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Snapshot directory path is empty".to_string(),
            ));
        }

        Ok(Config { snapshot_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Snapshot directory path is empty" if the path is empty
    /// - "Snapshot directory must be an absolute path" if the path is relative
    ///
    /// # Examples
    ///
    /// ```
    /// use diario::Config;
    /// use std::path::PathBuf;
    ///
    /// let invalid = Config {
    ///     snapshot_dir: PathBuf::from("relative/path"),
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.snapshot_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Snapshot directory path is empty".to_string(),
            ));
        }

        if !self.snapshot_dir.is_absolute() {
            return Err(AppError::Config(
                "Snapshot directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}
