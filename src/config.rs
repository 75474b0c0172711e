//! Bundle configuration (ebstage.yaml)
//!
//! The configuration is supplied by the deploy orchestrator as a single YAML
//! document and is immutable for the duration of one build.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EbstageError, Result};

/// Bundle configuration from ebstage.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Application name, used for package.json and derived resource names
    pub name: String,

    /// Application version
    pub version: String,

    /// Source application directory (holds optional .ebextensions/ and
    /// .platform/ override trees)
    pub path: PathBuf,

    /// Yum packages to install on the instance
    #[serde(default)]
    pub yum_packages: Vec<String>,

    /// Redirect plain HTTP to HTTPS at the nginx layer
    #[serde(default)]
    pub force_ssl: bool,

    /// Install the graceful shutdown hook
    #[serde(default)]
    pub graceful_shutdown: bool,

    /// Store environment variables in a bucket instead of EB option settings
    /// (works around the EB size limit on environment properties)
    #[serde(default)]
    pub long_env_vars: bool,

    /// Extra static files to place on the instance
    #[serde(default)]
    pub additional_files: Vec<AdditionalFile>,

    /// Build options
    pub build: BuildOptions,
}

/// One extra static file to place on the instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalFile {
    /// Where the file contents come from
    pub source: String,

    /// Absolute path on the instance
    pub target: String,
}

/// Build options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Directory the staged bundle and the archive are written under
    pub build_location: PathBuf,
}

impl BundleConfig {
    /// Load and validate a configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => EbstageError::ConfigNotFound {
                    path: path.display().to_string(),
                },
                _ => EbstageError::FileReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                },
            })?;

        let config: BundleConfig =
            serde_yaml::from_str(&contents).map_err(|e| EbstageError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EbstageError::ConfigInvalid {
                message: "app name must not be empty".to_string(),
            });
        }
        if self.version.trim().is_empty() {
            return Err(EbstageError::ConfigInvalid {
                message: "app version must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Directory the bundle is staged into
    pub fn bundle_dir(&self) -> PathBuf {
        self.build.build_location.join("bundle")
    }

    /// Path of the final archive
    pub fn archive_path(&self) -> PathBuf {
        self.build.build_location.join("bundle.tar.gz")
    }
}
