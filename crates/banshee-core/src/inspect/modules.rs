//! Module listing under src/modules

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::path::Path;

/// One module directory with its immediate sub-folders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub name: String,
    pub folders: Vec<String>,
}

/// List the modules of the project at `root`, sorted by name.
///
/// Only directories count, at both levels; loose files are ignored.
pub fn list_modules(root: &Path) -> Result<Vec<ModuleEntry>> {
    let modules_dir = root.join("src/modules");
    if !modules_dir.is_dir() {
        return Err(ScaffoldError::MissingModulesDir {
            path: root.to_path_buf(),
        }
        .into());
    }

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(&modules_dir)
        .with_context(|| format!("Failed to read directory: {}", modules_dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let folders = sub_folders(&entry.path())?;
        entries.push(ModuleEntry { name, folders });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn sub_folders(module_dir: &Path) -> Result<Vec<String>> {
    let mut folders = Vec::new();
    for entry in std::fs::read_dir(module_dir)
        .with_context(|| format!("Failed to read directory: {}", module_dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    folders.sort();
    Ok(folders)
}
