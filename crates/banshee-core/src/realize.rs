//! Plan execution against the filesystem

use crate::error::ScaffoldError;
use crate::scaffold::{GenerationPlan, PlanOp};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Create `root` and lay down every op of a project plan.
///
/// Fails before any write if `root` already exists. Ops apply in plan
/// order: directories are ensured recursively, files overwrite and create
/// missing parents. A mid-plan failure leaves the partial tree in place.
pub async fn realize(plan: &GenerationPlan, root: &Path) -> Result<()> {
    if root.exists() {
        return Err(ScaffoldError::TargetExists {
            path: root.to_path_buf(),
        }
        .into());
    }

    fs::create_dir_all(root)
        .await
        .context("Failed to create target directory")?;

    apply(plan, root).await
}

/// Apply an entity plan inside an existing project root.
///
/// `guard` is the entity's target path relative to `root`; if it already
/// exists nothing is written.
pub async fn realize_into(plan: &GenerationPlan, root: &Path, guard: &Path) -> Result<()> {
    let guard_path = root.join(guard);
    if guard_path.exists() {
        return Err(ScaffoldError::TargetExists { path: guard_path }.into());
    }

    apply(plan, root).await
}

async fn apply(plan: &GenerationPlan, root: &Path) -> Result<()> {
    for op in plan.ops() {
        match op {
            PlanOp::Dir(dir) => {
                let path = root.join(&dir.path);
                fs::create_dir_all(&path)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            }
            PlanOp::File(file) => {
                let path = root.join(&file.path);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).await.with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                }
                fs::write(&path, &file.content)
                    .await
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
            }
        }
    }

    Ok(())
}
