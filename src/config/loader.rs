//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use super::validator::{ValidationSeverity, ValidatorRegistry};
use crate::error::RoiError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .broker-roi.toml in the given directory
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use broker_roi::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Loaded config for domain: {}", config.domain);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .broker-roi.toml");
            }
        };

        Self::parse(&contents, &config_path)
    }

    /// Load an explicitly named config file; a missing file is an error
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        Self::load_file_with_fs(path, &RealFileSystem)
    }

    /// Load an explicitly named config file with a custom filesystem
    pub fn load_file_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<ConfigFile> {
        let contents = fs.read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RoiError::ConfigNotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                RoiError::Io {
                    context: path.display().to_string(),
                    source,
                }
            }
        })?;

        Self::parse(&contents, path)
    }

    /// Parse and validate config text
    ///
    /// Validation errors are returned as [`RoiError::InvalidConfig`];
    /// warnings are logged.
    pub fn parse(contents: &str, path: &Path) -> Result<ConfigFile> {
        let config: ConfigFile = toml_edit::de::from_str(contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let registry = ValidatorRegistry::with_defaults();
        let result = registry.validate_all(&config);
        for issue in &result.issues {
            match issue.severity {
                ValidationSeverity::Error => {}
                ValidationSeverity::Warning => log::warn!("{}", issue),
                ValidationSeverity::Info => log::info!("{}", issue),
            }
        }
        if result.has_errors() {
            let mut issues: Vec<String> = result.errors().iter().map(|i| i.to_string()).collect();
            let mut fixes: Vec<_> = registry.auto_fix_all(&config).into_iter().collect();
            fixes.sort();
            issues.extend(
                fixes
                    .into_iter()
                    .map(|(field, value)| format!("Suggested fix: {} = {}", field, value)),
            );
            return Err(RoiError::InvalidConfig {
                path: PathBuf::from(path),
                issues,
            }
            .into());
        }

        Ok(config)
    }

    /// Save config to .broker-roi.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context("Failed to write .broker-roi.toml")?;

        Ok(())
    }

    /// Check if config file exists in the directory
    pub fn exists(project_root: &Path) -> bool {
        Self::exists_with_fs(project_root, &RealFileSystem)
    }

    /// Check for a config file with a custom filesystem
    pub fn exists_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> bool {
        fs.exists(&project_root.join(CONFIG_FILE_NAME))
    }
}
