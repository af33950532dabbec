//! Read-only views over an existing generated project

pub mod info;
pub mod modules;

pub use info::{read_project_info, PackageManifest, ProjectInfo};
pub use modules::{list_modules, ModuleEntry};
