//! Banshee Core - Shared library for the banshee scaffolding CLI
//!
//! This library provides the core functionality for generating Expo React Native
//! starter projects and for growing them afterwards with modules, screens,
//! components, services, and hooks.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Planning** - Pure functions computing an ordered list of
//!   directory/file operations from the user's choices, with no filesystem access
//! - **Layer 2: Realization & Inspection** - Executing a plan against a target
//!   directory, reading back what an existing project contains, npm installs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI command flows
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use banshee_core::scaffold::{self, ScaffoldConfig};
//! use std::path::Path;
//!
//! let config = ScaffoldConfig::default();
//! let plan = scaffold::plan_project(&config, "my-app")?;
//! banshee_core::realize::realize(&plan, Path::new("my-app")).await?;
//! ```

pub mod error;
pub mod inspect;
pub mod install;
pub mod realize;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use scaffold::{
    plan_entity, plan_project, EntityKind, GenerationPlan, Navigation, PlanOp, ScaffoldConfig,
    StateManagement,
};
