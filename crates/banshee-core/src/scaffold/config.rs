//! User-facing scaffold choices

use clap::ValueEnum;
use std::fmt;

/// Navigation library wired into the generated app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Navigation {
    ExpoRouter,
    ReactNavigation,
}

impl Navigation {
    pub fn display_name(&self) -> &'static str {
        match self {
            Navigation::ExpoRouter => "Expo Router",
            Navigation::ReactNavigation => "React Navigation",
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// State management library wired into the generated app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum StateManagement {
    ReduxToolkit,
    Zustand,
    None,
}

impl StateManagement {
    pub fn display_name(&self) -> &'static str {
        match self {
            StateManagement::ReduxToolkit => "Redux Toolkit",
            StateManagement::Zustand => "Zustand",
            StateManagement::None => "None",
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable set of choices driving every branch of project planning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub navigation: Navigation,
    pub state_management: StateManagement,
    pub include_query_cache: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            navigation: Navigation::ExpoRouter,
            state_management: StateManagement::ReduxToolkit,
            include_query_cache: true,
        }
    }
}
