//! Configuration module for blockcheck
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BLOCKCHECK_*)
//! 3. Config file (`blockcheck.toml` in the working directory, or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides_from, ConfigWarning, DEFAULT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, PathsConfig, DEFAULT_ASSETS_DIR, DEFAULT_SOURCE};
