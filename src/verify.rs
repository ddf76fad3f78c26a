//! Import verification
//!
//! Checks every texture referenced by the source file against the assets
//! directory. All references are processed; missing ones are collected into
//! the report instead of aborting the run.

use std::path::{Path, PathBuf};

use crate::error::{BlockcheckError, BlockcheckResult};
use crate::scanner;

/// Resolution status of one reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceStatus {
    Verified,
    Missing,
}

impl ReferenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceStatus::Verified => "verified",
            ReferenceStatus::Missing => "missing",
        }
    }
}

/// A filename extracted from the source and its resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub filename: String,
    pub status: ReferenceStatus,
}

/// Outcome of a full verification pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub source: PathBuf,
    pub assets_dir: PathBuf,
    /// Every reference, in extraction order
    pub references: Vec<Reference>,
}

impl VerifyReport {
    pub fn new(source: impl Into<PathBuf>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            assets_dir: assets_dir.into(),
            references: Vec::new(),
        }
    }

    pub fn verified(&self) -> impl Iterator<Item = &str> {
        self.with_status(ReferenceStatus::Verified)
    }

    /// Filenames with no file under the assets directory
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.with_status(ReferenceStatus::Missing)
    }

    pub fn verified_count(&self) -> usize {
        self.verified().count()
    }

    pub fn missing_count(&self) -> usize {
        self.missing().count()
    }

    pub fn is_success(&self) -> bool {
        self.missing_count() == 0
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    fn with_status(&self, status: ReferenceStatus) -> impl Iterator<Item = &str> {
        self.references
            .iter()
            .filter(move |r| r.status == status)
            .map(|r| r.filename.as_str())
    }
}

/// Verify all references in `source` against `assets_dir`.
pub fn verify_imports(source: &Path, assets_dir: &Path) -> BlockcheckResult<VerifyReport> {
    verify_imports_with_callback(source, assets_dir, |_| {})
}

/// Verify all references, calling `on_reference` as each one is resolved.
///
/// Fails with [`BlockcheckError::MissingSourceFile`] before any read when
/// `source` does not exist.
pub fn verify_imports_with_callback<F>(
    source: &Path,
    assets_dir: &Path,
    on_reference: F,
) -> BlockcheckResult<VerifyReport>
where
    F: FnMut(&Reference),
{
    if !source.exists() {
        return Err(BlockcheckError::MissingSourceFile {
            path: source.to_path_buf(),
        });
    }

    let filenames = scanner::scan_file(source)?;
    Ok(resolve(source, assets_dir, filenames, on_reference))
}

/// Verify references found in already-loaded source text.
pub fn verify_text(text: &str, assets_dir: &Path) -> VerifyReport {
    resolve(
        Path::new("<memory>"),
        assets_dir,
        scanner::scan_references(text),
        |_| {},
    )
}

fn resolve<F>(
    source: &Path,
    assets_dir: &Path,
    filenames: Vec<String>,
    mut on_reference: F,
) -> VerifyReport
where
    F: FnMut(&Reference),
{
    let mut report = VerifyReport::new(source, assets_dir);

    for filename in filenames {
        let status = if assets_dir.join(&filename).exists() {
            ReferenceStatus::Verified
        } else {
            ReferenceStatus::Missing
        };
        let reference = Reference { filename, status };
        on_reference(&reference);
        report.references.push(reference);
    }

    report
}
