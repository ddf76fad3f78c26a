//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BlockcheckResult;

use super::loader::{self, ConfigWarning};

/// Source file scanned when nothing else is configured
pub const DEFAULT_SOURCE: &str = "components/MiningBlock.tsx";

/// Directory expected to hold every block texture
pub const DEFAULT_ASSETS_DIR: &str = "assets/blocks";

/// Input locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,

    #[serde(default = "default_assets")]
    pub assets: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            assets: default_assets(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE)
}

fn default_assets() -> PathBuf {
    PathBuf::from(DEFAULT_ASSETS_DIR)
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BlockcheckResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BlockcheckResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist. Without one, `blockcheck.toml` under
    /// `project_root` is used when present, otherwise defaults. Environment
    /// overrides are applied last. Returns the file actually loaded, if any.
    pub fn resolve(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> BlockcheckResult<(Self, Vec<ConfigWarning>, Option<PathBuf>)> {
        loader::resolve(project_root, explicit)
    }

    /// Apply environment variable overrides (BLOCKCHECK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
