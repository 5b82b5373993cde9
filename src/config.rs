//! Configuration management for Gator
//!
//! The configuration is a small JSON document in the user's home directory
//! holding the database URL and the name of the current user. It is never
//! patched in place: every change rewrites the whole file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name, relative to the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".gatorconfig.json";

/// Persisted configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Connection string for the user database
    pub db_url: String,

    /// Name of the active user, empty until someone logs in or registers
    #[serde(default)]
    pub current_user_name: String,
}

impl Config {
    /// Create a configuration with no current user
    pub fn new<S: Into<String>>(db_url: S) -> Self {
        Self {
            db_url: db_url.into(),
            current_user_name: String::new(),
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
        Ok(home.join(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from the default location
    pub fn read() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::read_from_path(&config_path)
    }

    /// Load configuration from a specific path
    ///
    /// A missing file is an error; no default configuration is created.
    pub fn read_from_path(path: &Path) -> Result<Self> {
        debug!("Reading config from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the current user and persist the whole configuration to `path`
    ///
    /// `self` is only updated once the file has been written.
    pub fn set_user_at(&mut self, name: &str, path: &Path) -> Result<()> {
        let updated = Self {
            current_user_name: name.to_string(),
            ..self.clone()
        };
        updated.save_to_path(path)?;
        *self = updated;
        Ok(())
    }

    /// Save configuration to a specific path
    ///
    /// The content goes to a sibling temp file first and is renamed over
    /// the target, so readers see either the old or the new file. A
    /// symlinked config is resolved first so the link itself survives.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string(self)?;
        let target = if path.exists() {
            fs::canonicalize(path).map_err(|source| Error::ConfigWrite {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            path.to_path_buf()
        };
        let temp_path = temp_path_for(&target);

        let write_err = |source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };

        {
            let mut file = fs::File::create(&temp_path).map_err(write_err)?;
            file.write_all(content.as_bytes()).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }

        fs::rename(&temp_path, &target).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            write_err(e)
        })?;

        debug!("Wrote config to {}", target.display());
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    path.with_file_name(format!("{}.tmp.{}", file_name, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path().unwrap();
        assert!(path.ends_with(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_read_uses_default_path() {
        let default_path = Config::default_config_path().unwrap();
        match Config::read() {
            Ok(_) => assert!(default_path.exists()),
            Err(Error::ConfigRead { path, .. }) | Err(Error::ConfigParse { path, .. }) => {
                assert_eq!(path, default_path)
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_read_from_path() {
        let file = write_config(r#"{"db_url":"x","current_user_name":"alice"}"#);
        let config = Config::read_from_path(file.path()).unwrap();
        assert_eq!(config.db_url, "x");
        assert_eq!(config.current_user_name, "alice");
    }

    #[test]
    fn test_read_without_current_user() {
        let file = write_config(r#"{"db_url":"gator.db"}"#);
        let config = Config::read_from_path(file.path()).unwrap();
        assert_eq!(config, Config::new("gator.db"));
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

        let err = Config::read_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_malformed_json() {
        let file = write_config("{not json");
        let err = Config::read_from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));

        let file = write_config(r#"{"current_user_name":"alice"}"#);
        let err = Config::read_from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_set_user_round_trip() {
        let file = write_config(r#"{"db_url":"x","current_user_name":"alice"}"#);
        let mut config = Config::read_from_path(file.path()).unwrap();

        config.set_user_at("bob", file.path()).unwrap();
        assert_eq!(config.current_user_name, "bob");

        let reloaded = Config::read_from_path(file.path()).unwrap();
        assert_eq!(reloaded.db_url, "x");
        assert_eq!(reloaded.current_user_name, "bob");

        let raw = fs::read_to_string(file.path()).unwrap();
        assert_eq!(raw, r#"{"db_url":"x","current_user_name":"bob"}"#);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

        Config::new("gator.db").save_to_path(&path).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(path.exists());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join(DEFAULT_CONFIG_FILE);

        let mut config = Config::new("gator.db");
        config.current_user_name = "alice".to_string();

        let err = config.set_user_at("bob", &path).unwrap_err();
        assert!(matches!(err, Error::ConfigWrite { .. }));
        assert_eq!(config.current_user_name, "alice");
    }

    #[cfg(unix)]
    #[test]
    fn test_set_user_through_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("dotfiles_gator.json");
        let link = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&real, r#"{"db_url":"x","current_user_name":"alice"}"#).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut config = Config::read_from_path(&link).unwrap();
        config.set_user_at("bob", &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let raw = fs::read_to_string(&real).unwrap();
        assert_eq!(raw, r#"{"db_url":"x","current_user_name":"bob"}"#);
        assert_eq!(Config::read_from_path(&link).unwrap().current_user_name, "bob");
    }
}
