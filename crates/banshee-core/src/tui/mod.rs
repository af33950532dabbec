//! Interactive command flows built on cliclack

pub mod commands;
pub mod prompts;

pub use commands::{run_add, run_info, run_init, run_list_modules};
pub use prompts::InitOptions;
