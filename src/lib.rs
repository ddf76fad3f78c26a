//! Blockcheck - build-time block texture import checker
//!
//! Scans one front-end source file for block texture imports of the form
//! `import x from '../assets/blocks/<file>';` and checks that every
//! referenced file exists under the assets directory.

pub mod config;
pub mod error;
pub mod scanner;
pub mod verify;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigWarning};
pub use error::{BlockcheckError, BlockcheckResult};
pub use scanner::{scan_file, scan_references, IMPORT_PATTERN};
pub use verify::{
    verify_imports, verify_imports_with_callback, verify_text, Reference, ReferenceStatus,
    VerifyReport,
};
