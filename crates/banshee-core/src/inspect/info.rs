//! Project information derived from package.json

use crate::error::ScaffoldError;
use crate::scaffold::{Navigation, StateManagement};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Libraries surfaced in the info report, in display order
const WATCHED_LIBRARIES: &[&str] = &[
    "expo",
    "react",
    "react-native",
    "expo-router",
    "@react-navigation/native",
    "@reduxjs/toolkit",
    "zustand",
    "@tanstack/react-query",
];

/// The slice of package.json this tool cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: serde_json::Map<String, serde_json::Value>,
}

/// Summary of a generated project, derived from its manifest
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub navigation: Option<Navigation>,
    pub state_management: StateManagement,
    pub has_query_cache: bool,
    /// Present watched libraries with their declared versions
    pub installed: Vec<(String, String)>,
}

/// Read and summarize the project manifest at `root/package.json`.
pub fn read_project_info(root: &Path) -> Result<ProjectInfo> {
    let manifest_path = root.join("package.json");
    if !manifest_path.is_file() {
        return Err(ScaffoldError::MissingManifest {
            path: root.to_path_buf(),
        }
        .into());
    }

    let raw = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read file: {}", manifest_path.display()))?;
    let manifest: PackageManifest = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    Ok(summarize(&manifest))
}

fn summarize(manifest: &PackageManifest) -> ProjectInfo {
    let has = |key: &str| manifest.dependencies.contains_key(key);

    let navigation = if has("expo-router") {
        Some(Navigation::ExpoRouter)
    } else if has("@react-navigation/native") {
        Some(Navigation::ReactNavigation)
    } else {
        None
    };

    let state_management = if has("@reduxjs/toolkit") {
        StateManagement::ReduxToolkit
    } else if has("zustand") {
        StateManagement::Zustand
    } else {
        StateManagement::None
    };

    let installed = WATCHED_LIBRARIES
        .iter()
        .filter_map(|lib| {
            manifest
                .dependencies
                .get(*lib)
                .and_then(|version| version.as_str())
                .map(|version| (lib.to_string(), version.to_string()))
        })
        .collect();

    ProjectInfo {
        name: manifest
            .name
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
        version: manifest
            .version
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
        navigation,
        state_management,
        has_query_cache: has("@tanstack/react-query"),
        installed,
    }
}
