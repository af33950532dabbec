//! Plan types: ordered directory and file operations

use std::path::{Path, PathBuf};

/// One directory to ensure under the target root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirOp {
    pub path: PathBuf,
}

/// One file to write under the target root; content is already rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOp {
    pub path: PathBuf,
    pub content: String,
}

/// A single step of a generation plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOp {
    Dir(DirOp),
    File(FileOp),
}

/// Ordered list of operations producing a project or entity on disk.
///
/// Paths are relative to the target root. Order is part of the contract:
/// ops apply top to bottom, and a path may appear more than once (later
/// file writes win).
#[derive(Debug, Clone, Default)]
pub struct GenerationPlan {
    ops: Vec<PlanOp>,
}

impl GenerationPlan {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn push_dir(&mut self, path: impl Into<PathBuf>) {
        self.ops.push(PlanOp::Dir(DirOp { path: path.into() }));
    }

    pub fn push_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.ops.push(PlanOp::File(FileOp {
            path: path.into(),
            content: content.into(),
        }));
    }

    pub fn ops(&self) -> &[PlanOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Relative paths of every directory op, in plan order
    pub fn dir_paths(&self) -> Vec<&Path> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PlanOp::Dir(dir) => Some(dir.path.as_path()),
                PlanOp::File(_) => None,
            })
            .collect()
    }

    /// Relative paths of every file op, in plan order (duplicates included)
    pub fn file_paths(&self) -> Vec<&Path> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PlanOp::File(file) => Some(file.path.as_path()),
                PlanOp::Dir(_) => None,
            })
            .collect()
    }

    /// Content of the last file op for `path`, if any
    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.ops.iter().rev().find_map(|op| match op {
            PlanOp::File(file) if file.path == path => Some(file.content.as_str()),
            _ => None,
        })
    }
}
