//! Test environment for isolated blockcheck runs.
//!
//! Provides `TestEnv` - a temp project directory with a source file and an
//! assets directory, plus helpers to run the blockcheck binary inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{ASSETS_DIR, SOURCE_PATH};

/// Environment variables that change output and must not leak in from the host.
const SCRUBBED_ENV: &[&str] = &[
    "BLOCKCHECK_SOURCE",
    "BLOCKCHECK_ASSETS",
    "BLOCKCHECK_COLOR",
    "GITHUB_ACTIONS",
    "NO_COLOR",
];

/// Result of running the blockcheck binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Stdout split into lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Isolated project directory.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Path to the blockcheck binary
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project: no source file and no assets directory.
    pub fn empty() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_blockcheck")),
        }
    }

    /// Project with the default source file and the given textures present.
    pub fn with_source(source: &str, textures: &[&str]) -> Self {
        let env = Self::empty();
        env.write_project_file(SOURCE_PATH, source);
        env.create_dir(ASSETS_DIR);
        for texture in textures {
            env.write_project_file(&format!("{}/{}", ASSETS_DIR, texture), "texture");
        }
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Create a directory in the project
    pub fn create_dir(&self, relative_path: &str) {
        std::fs::create_dir_all(self.project_path(relative_path))
            .expect("Failed to create directory");
    }

    /// Run blockcheck from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run blockcheck from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run blockcheck from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);

        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute blockcheck");

        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
