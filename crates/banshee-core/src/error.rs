//! Typed errors shared across scaffold operations

use std::path::PathBuf;
use thiserror::Error;

/// Failure cases callers branch on.
///
/// Plain I/O failures are reported through `anyhow` with the failing path
/// attached as context; these variants carry the cases with distinct user
/// messaging or exit behavior.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The file or directory a plan would create is already on disk
    #[error("target already exists: {}", .path.display())]
    TargetExists { path: PathBuf },

    /// No package.json where a project manifest was expected
    #[error("package.json not found in {}", .path.display())]
    MissingManifest { path: PathBuf },

    /// No src/modules directory under the project root
    #[error("src/modules directory not found in {}", .path.display())]
    MissingModulesDir { path: PathBuf },

    /// npm install ran but exited non-zero
    #[error("npm install failed with exit code {code}")]
    InstallFailed { code: i32 },
}
