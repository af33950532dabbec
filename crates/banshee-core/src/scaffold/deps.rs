//! npm dependency tables for generated package.json files

use super::config::{Navigation, ScaffoldConfig, StateManagement};

/// Dependencies every generated project gets
const BASE_DEPENDENCIES: &[(&str, &str)] = &[
    ("expo", "~52.0.0"),
    ("react", "18.3.1"),
    ("react-native", "0.76.9"),
    ("expo-status-bar", "~2.0.0"),
    ("expo-asset", "~11.0.1"),
    ("expo-font", "~13.0.1"),
    ("expo-splash-screen", "~0.29.16"),
    ("react-native-web", "0.19.13"),
    ("axios", "^1.6.5"),
    ("react-native-toast-message", "^2.2.0"),
    ("@react-native-async-storage/async-storage", "1.23.1"),
];

/// Added for the Expo Router navigation choice
const EXPO_ROUTER_DEPENDENCIES: &[(&str, &str)] = &[
    ("expo-router", "~4.0.0"),
    ("expo-linking", "~7.0.0"),
    ("expo-constants", "~17.0.0"),
    ("react-native-safe-area-context", "4.12.0"),
    ("react-native-screens", "~4.4.0"),
];

/// Added for the React Navigation choice
const REACT_NAVIGATION_DEPENDENCIES: &[(&str, &str)] = &[
    ("@react-navigation/native", "^6.1.9"),
    ("@react-navigation/native-stack", "^6.9.17"),
    ("react-native-safe-area-context", "4.12.0"),
    ("react-native-screens", "~4.4.0"),
];

/// Added for the Redux Toolkit state choice
const REDUX_DEPENDENCIES: &[(&str, &str)] =
    &[("@reduxjs/toolkit", "^2.0.1"), ("react-redux", "^9.0.4")];

/// Added for the Zustand state choice
const ZUSTAND_DEPENDENCIES: &[(&str, &str)] = &[("zustand", "^4.4.7")];

/// Added when the query cache is opted in
const TANSTACK_DEPENDENCIES: &[(&str, &str)] = &[("@tanstack/react-query", "^5.17.19")];

/// Dev dependencies are the same for every configuration
const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@babel/core", "^7.25.2"),
    ("@types/react", "~18.3.12"),
    ("typescript", "^5.3.3"),
    ("eslint", "^8.57.0"),
    ("eslint-config-expo", "^7.1.2"),
    ("eslint-config-prettier", "^9.1.0"),
    ("eslint-plugin-prettier", "^5.1.3"),
    ("prettier", "^3.2.4"),
];

pub fn navigation_dependencies(navigation: Navigation) -> &'static [(&'static str, &'static str)] {
    match navigation {
        Navigation::ExpoRouter => EXPO_ROUTER_DEPENDENCIES,
        Navigation::ReactNavigation => REACT_NAVIGATION_DEPENDENCIES,
    }
}

pub fn state_dependencies(state: StateManagement) -> &'static [(&'static str, &'static str)] {
    match state {
        StateManagement::ReduxToolkit => REDUX_DEPENDENCIES,
        StateManagement::Zustand => ZUSTAND_DEPENDENCIES,
        StateManagement::None => &[],
    }
}

/// Runtime dependency list for a configuration, in package.json key order.
///
/// Key sets of the merged groups never overlap, so the merge is order-
/// independent; base-first is the order the keys appear in the manifest.
pub fn dependencies(config: &ScaffoldConfig) -> Vec<(&'static str, &'static str)> {
    let mut deps = BASE_DEPENDENCIES.to_vec();
    deps.extend_from_slice(navigation_dependencies(config.navigation));
    deps.extend_from_slice(state_dependencies(config.state_management));
    if config.include_query_cache {
        deps.extend_from_slice(TANSTACK_DEPENDENCIES);
    }
    deps
}

/// Dev dependency list, identical for every configuration
pub fn dev_dependencies() -> &'static [(&'static str, &'static str)] {
    DEV_DEPENDENCIES
}
