//! Block texture import scanner
//!
//! Only one statement shape is recognised:
//!
//! ```text
//! import dirtBlock from '../assets/blocks/dirt.jpg';
//! ```
//!
//! Other prefixes, double quotes, or imports split across lines are not
//! matched and simply produce no reference.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BlockcheckError, BlockcheckResult};

/// Pattern for a single-line block texture import. Capture 1 is the filename.
pub const IMPORT_PATTERN: &str = r"import\s+\w+\s+from\s+'\.\./assets/blocks/([^']+)';";

static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMPORT_PATTERN).expect("IMPORT_PATTERN is a valid regex"));

/// Extract referenced filenames in order of appearance, duplicates kept.
pub fn scan_references(text: &str) -> Vec<String> {
    IMPORT_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Read `path` and extract its references.
pub fn scan_file(path: &Path) -> BlockcheckResult<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| BlockcheckError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scan_references(&text))
}
