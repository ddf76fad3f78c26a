//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BlockcheckError, BlockcheckResult};

use super::types::{ColorMode, Config};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "blockcheck.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BlockcheckResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BlockcheckError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

pub(super) fn resolve(
    project_root: &Path,
    explicit: Option<&Path>,
) -> BlockcheckResult<(Config, Vec<ConfigWarning>, Option<PathBuf>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let path = project_root.join(DEFAULT_CONFIG_FILE);
            path.is_file().then_some(path)
        }
    };

    let Some(path) = candidate else {
        return Ok((with_env_overrides(Config::default()), Vec::new(), None));
    };

    let (config, warnings) = load_with_warnings(&path)?;
    Ok((with_env_overrides(config), warnings, Some(path)))
}

/// Apply environment variable overrides (BLOCKCHECK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // BLOCKCHECK_SOURCE
    if let Some(source) = get_env("BLOCKCHECK_SOURCE").filter(|s| !s.is_empty()) {
        config.paths.source = PathBuf::from(source);
    }

    // BLOCKCHECK_ASSETS
    if let Some(assets) = get_env("BLOCKCHECK_ASSETS").filter(|s| !s.is_empty()) {
        config.paths.assets = PathBuf::from(assets);
    }

    // BLOCKCHECK_COLOR (unrecognised values are ignored)
    if let Some(mode) = get_env("BLOCKCHECK_COLOR").as_deref().and_then(ColorMode::parse) {
        config.output.color = mode;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["paths", "source", "assets", "output", "color"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
