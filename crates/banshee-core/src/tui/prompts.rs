//! Charm-style CLI prompts using cliclack

use crate::scaffold::{Navigation, ScaffoldConfig, StateManagement};
use anyhow::Result;

/// Flags for project creation; unset choices fall back to prompts
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Navigation library, skipping the prompt when set
    pub navigation: Option<Navigation>,

    /// State management library, skipping the prompt when set
    pub state_management: Option<StateManagement>,

    /// Whether to add the query cache, skipping the prompt when set
    pub query_cache: Option<bool>,

    /// Skip the npm install step
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Resolve the scaffold configuration from flags, defaults, and prompts.
///
/// Each choice resolves flag first, then the default under `--yes`, and
/// only prompts when neither applies.
pub fn resolve_config(opts: &InitOptions) -> Result<ScaffoldConfig> {
    let defaults = ScaffoldConfig::default();

    let navigation = match opts.navigation {
        Some(choice) => choice,
        None if opts.yes => defaults.navigation,
        None => select_navigation()?,
    };

    let state_management = match opts.state_management {
        Some(choice) => choice,
        None if opts.yes => defaults.state_management,
        None => select_state_management()?,
    };

    let include_query_cache = match opts.query_cache {
        Some(choice) => choice,
        None if opts.yes => defaults.include_query_cache,
        None => cliclack::confirm("Add TanStack Query?")
            .initial_value(true)
            .interact()?,
    };

    Ok(ScaffoldConfig {
        navigation,
        state_management,
        include_query_cache,
    })
}

fn select_navigation() -> Result<Navigation> {
    let choice = cliclack::select("Choose navigation library:")
        .item(
            Navigation::ExpoRouter,
            Navigation::ExpoRouter.display_name(),
            "",
        )
        .item(
            Navigation::ReactNavigation,
            Navigation::ReactNavigation.display_name(),
            "",
        )
        .interact()?;

    Ok(choice)
}

fn select_state_management() -> Result<StateManagement> {
    let choice = cliclack::select("Choose state management library:")
        .item(
            StateManagement::ReduxToolkit,
            StateManagement::ReduxToolkit.display_name(),
            "",
        )
        .item(
            StateManagement::Zustand,
            StateManagement::Zustand.display_name(),
            "",
        )
        .item(
            StateManagement::None,
            StateManagement::None.display_name(),
            "",
        )
        .interact()?;

    Ok(choice)
}
