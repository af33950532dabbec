//! Project and entity planning
//!
//! Everything here is pure: a plan is computed from the user's choices alone,
//! and only `crate::realize` touches the filesystem.

pub mod config;
pub mod deps;
pub mod entity;
pub mod manifest;
pub mod plan;
pub mod project;
pub mod templates;

pub use config::{Navigation, ScaffoldConfig, StateManagement};
pub use entity::{entity_name, plan_entity, target_path, EntityKind};
pub use plan::{DirOp, FileOp, GenerationPlan, PlanOp};
pub use project::plan_project;
