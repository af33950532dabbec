//! Rendered JSON manifests for generated projects
//!
//! Rendering matches the byte-level surface of the generated files: 2-space
//! pretty printing, insertion-ordered keys, no trailing newline.

use super::config::ScaffoldConfig;
use super::deps;
use anyhow::Result;
use serde_json::{json, Map, Value};

pub fn render_package_json(config: &ScaffoldConfig, project_name: &str) -> Result<String> {
    let mut dependencies = Map::new();
    for (name, version) in deps::dependencies(config) {
        dependencies.insert(name.to_string(), Value::String(version.to_string()));
    }

    let mut dev_dependencies = Map::new();
    for (name, version) in deps::dev_dependencies() {
        dev_dependencies.insert(name.to_string(), Value::String(version.to_string()));
    }

    let manifest = json!({
        "name": project_name,
        "version": "1.0.0",
        "main": "expo-router/entry",
        "scripts": {
            "start": "expo start",
            "android": "expo start --android",
            "ios": "expo start --ios",
            "web": "expo start --web",
            "lint": "eslint .",
            "lint:fix": "eslint . --fix",
            "format": "prettier --write \"**/*.{js,jsx,ts,tsx,json,md}\"",
            "format:check": "prettier --check \"**/*.{js,jsx,ts,tsx,json,md}\"",
        },
        "dependencies": dependencies,
        "devDependencies": dev_dependencies,
        "private": true,
    });

    Ok(serde_json::to_string_pretty(&manifest)?)
}

pub fn render_tsconfig() -> Result<String> {
    let manifest = json!({
        "extends": "expo/tsconfig.base",
        "compilerOptions": {
            "strict": true,
            "baseUrl": ".",
            "paths": {
                "@/*": ["src/*"],
                "@components/*": ["src/components/*"],
                "@screens/*": ["src/screens/*"],
                "@modules/*": ["src/modules/*"],
                "@utils/*": ["src/utils/*"],
                "@services/*": ["src/services/*"],
                "@constants/*": ["src/constants/*"],
                "@types/*": ["src/types/*"],
                "@hooks/*": ["src/hooks/*"],
                "@assets/*": ["src/assets/*"],
                "@store/*": ["src/store/*"],
            },
        },
    });

    Ok(serde_json::to_string_pretty(&manifest)?)
}

pub fn render_app_json(project_name: &str) -> Result<String> {
    let manifest = json!({
        "expo": {
            "name": project_name,
            "slug": project_name,
            "version": "1.0.0",
            "orientation": "portrait",
            "icon": "./src/assets/icon.png",
            "userInterfaceStyle": "light",
            "splash": {
                "image": "./src/assets/splash.png",
                "resizeMode": "contain",
                "backgroundColor": "#ffffff",
            },
            "ios": {
                "supportsTablet": true,
            },
            "android": {
                "adaptiveIcon": {
                    "foregroundImage": "./src/assets/adaptive-icon.png",
                    "backgroundColor": "#ffffff",
                },
            },
            "web": {
                "favicon": "./src/assets/favicon.png",
            },
        },
    });

    Ok(serde_json::to_string_pretty(&manifest)?)
}

pub fn render_prettierrc() -> Result<String> {
    let manifest = json!({
        "semi": true,
        "trailingComma": "es5",
        "singleQuote": true,
        "printWidth": 100,
        "tabWidth": 2,
        "useTabs": false,
        "arrowParens": "always",
        "endOfLine": "lf",
    });

    Ok(serde_json::to_string_pretty(&manifest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::config::{Navigation, StateManagement};

    #[test]
    fn test_package_json_key_order() {
        let rendered = render_package_json(&ScaffoldConfig::default(), "my-app").unwrap();

        let name_at = rendered.find("\"name\"").unwrap();
        let version_at = rendered.find("\"version\"").unwrap();
        let main_at = rendered.find("\"main\"").unwrap();
        let scripts_at = rendered.find("\"scripts\"").unwrap();
        let deps_at = rendered.find("\"dependencies\"").unwrap();
        let dev_deps_at = rendered.find("\"devDependencies\"").unwrap();
        let private_at = rendered.find("\"private\"").unwrap();

        assert!(name_at < version_at);
        assert!(version_at < main_at);
        assert!(main_at < scripts_at);
        assert!(scripts_at < deps_at);
        assert!(deps_at < dev_deps_at);
        assert!(dev_deps_at < private_at);
    }

    #[test]
    fn test_package_json_round_trips_with_expected_dependencies() {
        let config = ScaffoldConfig {
            navigation: Navigation::ReactNavigation,
            state_management: StateManagement::None,
            include_query_cache: false,
        };
        let rendered = render_package_json(&config, "demo").unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed["name"], "demo");
        assert_eq!(parsed["main"], "expo-router/entry");
        assert_eq!(parsed["private"], true);
        assert_eq!(parsed["scripts"]["start"], "expo start");

        let deps = parsed["dependencies"].as_object().unwrap();
        assert!(deps.contains_key("@react-navigation/native"));
        assert!(!deps.contains_key("expo-router"));
        assert!(!deps.contains_key("zustand"));
        assert!(!deps.contains_key("@reduxjs/toolkit"));
        assert!(!deps.contains_key("@tanstack/react-query"));

        let dev_deps = parsed["devDependencies"].as_object().unwrap();
        assert_eq!(dev_deps.len(), 8);
        assert_eq!(dev_deps["typescript"], "^5.3.3");
    }

    #[test]
    fn test_rendered_json_shape() {
        let rendered = render_prettierrc().unwrap();
        assert!(rendered.starts_with("{\n  \"semi\": true,"));
        assert!(rendered.ends_with('}'));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_tsconfig_lists_all_path_aliases() {
        let rendered = render_tsconfig().unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed["extends"], "expo/tsconfig.base");
        assert_eq!(parsed["compilerOptions"]["strict"], true);
        let paths = parsed["compilerOptions"]["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 11);
        assert_eq!(paths["@/*"][0], "src/*");
        assert_eq!(paths["@store/*"][0], "src/store/*");
    }

    #[test]
    fn test_app_json_embeds_project_name() {
        let rendered = render_app_json("demo").unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed["expo"]["name"], "demo");
        assert_eq!(parsed["expo"]["slug"], "demo");
        assert_eq!(parsed["expo"]["ios"]["supportsTablet"], true);
        assert_eq!(
            parsed["expo"]["android"]["adaptiveIcon"]["backgroundColor"],
            "#ffffff"
        );
    }
}
