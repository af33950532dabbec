//! npm dependency installation

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Version of the npm binary on PATH, if any
pub fn npm_version() -> Option<String> {
    std::process::Command::new("npm")
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}

/// Run `npm install` in `dir` with output captured.
///
/// A non-zero exit comes back as a typed error carrying the exit code,
/// with npm's stderr attached as context.
pub async fn install_dependencies(dir: &Path) -> Result<()> {
    let output = Command::new("npm")
        .arg("install")
        .current_dir(dir)
        .output()
        .await
        .with_context(|| format!("Failed to run npm install in {}", dir.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let code = output.status.code().unwrap_or(-1);
        return Err(ScaffoldError::InstallFailed { code })
            .with_context(|| format!("npm install reported:\n{}", stderr.trim()));
    }

    Ok(())
}
