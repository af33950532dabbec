//! Full project plan assembly

use super::config::{Navigation, ScaffoldConfig, StateManagement};
use super::manifest;
use super::plan::GenerationPlan;
use super::templates;
use anyhow::Result;

/// Directories every project starts with, in creation order
const PROJECT_DIRECTORIES: &[&str] = &[
    "app",
    "src/components",
    "src/screens",
    "src/modules",
    "src/utils",
    "src/services",
    "src/constants",
    "src/types",
    "src/hooks",
    "src/assets",
    "src/store",
];

/// Folders that get an empty barrel index.ts
const INDEX_FOLDERS: &[&str] = &[
    "src/components",
    "src/screens",
    "src/utils",
    "src/services",
    "src/constants",
    "src/types",
    "src/hooks",
];

/// Compute the ordered operation list for a fresh project.
///
/// Pure: never touches the filesystem. Op order matches the order the
/// generated tree is laid down.
pub fn plan_project(config: &ScaffoldConfig, project_name: &str) -> Result<GenerationPlan> {
    let mut plan = GenerationPlan::new();

    for dir in PROJECT_DIRECTORIES {
        plan.push_dir(*dir);
    }
    plan.push_file("src/modules/.gitkeep", "");
    plan.push_file("src/assets/.gitkeep", "");

    plan.push_file(
        "package.json",
        manifest::render_package_json(config, project_name)?,
    );
    plan.push_file("tsconfig.json", manifest::render_tsconfig()?);
    plan.push_file("app.json", manifest::render_app_json(project_name)?);

    plan.push_file(".gitignore", templates::GITIGNORE.trim());
    plan.push_file(".eslintrc.js", templates::ESLINTRC);
    plan.push_file(".prettierrc", manifest::render_prettierrc()?);
    plan.push_file(".prettierignore", templates::PRETTIERIGNORE.trim());

    match config.navigation {
        Navigation::ExpoRouter => {
            plan.push_file("app/_layout.tsx", templates::LAYOUT_EXPO_ROUTER);
            plan.push_file("app/index.tsx", templates::HOME_SCREEN);
        }
        Navigation::ReactNavigation => {
            plan.push_file("app/_layout.tsx", templates::LAYOUT_REACT_NAVIGATION);
        }
    }

    for folder in INDEX_FOLDERS {
        plan.push_file(format!("{}/index.ts", folder), "");
    }

    plan.push_file("src/services/api.ts", templates::API_CLIENT);

    if config.include_query_cache {
        // Written twice around the directory op; the second write overwrites
        // with identical content.
        plan.push_file("src/config/queryClient.ts", templates::QUERY_CLIENT);
        plan.push_dir("src/config");
        plan.push_file("src/config/queryClient.ts", templates::QUERY_CLIENT);
    }

    match config.state_management {
        StateManagement::ReduxToolkit => {
            plan.push_file("src/store/authSlice.ts", templates::AUTH_SLICE);
            plan.push_file("src/store/store.ts", templates::REDUX_STORE);
            plan.push_file("src/store/hooks.ts", templates::REDUX_HOOKS);
            plan.push_file("src/store/index.ts", templates::REDUX_INDEX);
        }
        StateManagement::Zustand => {
            plan.push_file("src/store/authStore.ts", templates::AUTH_STORE);
            plan.push_file("src/store/index.ts", templates::ZUSTAND_INDEX);
        }
        StateManagement::None => {}
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn all_configs() -> Vec<ScaffoldConfig> {
        let mut configs = Vec::new();
        for navigation in [Navigation::ExpoRouter, Navigation::ReactNavigation] {
            for state_management in [
                StateManagement::ReduxToolkit,
                StateManagement::Zustand,
                StateManagement::None,
            ] {
                for include_query_cache in [true, false] {
                    configs.push(ScaffoldConfig {
                        navigation,
                        state_management,
                        include_query_cache,
                    });
                }
            }
        }
        configs
    }

    #[test]
    fn test_directory_set_per_config() {
        for config in all_configs() {
            let plan = plan_project(&config, "demo").unwrap();
            let dirs = plan.dir_paths();

            for dir in PROJECT_DIRECTORIES {
                assert!(dirs.contains(&Path::new(dir)), "missing {}", dir);
            }
            assert_eq!(
                dirs.contains(&Path::new("src/config")),
                config.include_query_cache
            );
            let expected = PROJECT_DIRECTORIES.len() + usize::from(config.include_query_cache);
            assert_eq!(dirs.len(), expected);
        }
    }

    #[test]
    fn test_home_screen_only_for_expo_router() {
        for config in all_configs() {
            let plan = plan_project(&config, "demo").unwrap();
            let files = plan.file_paths();

            let has_home = files.contains(&Path::new("app/index.tsx"));
            assert_eq!(has_home, config.navigation == Navigation::ExpoRouter);
            assert!(files.contains(&Path::new("app/_layout.tsx")));

            let layout = plan.file_content("app/_layout.tsx").unwrap();
            match config.navigation {
                Navigation::ExpoRouter => assert!(layout.contains("from 'expo-router'")),
                Navigation::ReactNavigation => {
                    assert!(layout.contains("NavigationContainer"))
                }
            }
        }
    }

    #[test]
    fn test_store_files_per_state_choice() {
        for config in all_configs() {
            let plan = plan_project(&config, "demo").unwrap();
            let files = plan.file_paths();

            let redux = config.state_management == StateManagement::ReduxToolkit;
            let zustand = config.state_management == StateManagement::Zustand;
            assert_eq!(files.contains(&Path::new("src/store/authSlice.ts")), redux);
            assert_eq!(files.contains(&Path::new("src/store/store.ts")), redux);
            assert_eq!(files.contains(&Path::new("src/store/hooks.ts")), redux);
            assert_eq!(files.contains(&Path::new("src/store/authStore.ts")), zustand);
            assert_eq!(
                files.contains(&Path::new("src/store/index.ts")),
                redux || zustand
            );
        }
    }

    #[test]
    fn test_query_client_written_twice_when_opted_in() {
        let plan = plan_project(&ScaffoldConfig::default(), "demo").unwrap();
        let count = plan
            .file_paths()
            .iter()
            .filter(|p| **p == Path::new("src/config/queryClient.ts"))
            .count();
        assert_eq!(count, 2);

        let opted_out = ScaffoldConfig {
            include_query_cache: false,
            ..ScaffoldConfig::default()
        };
        let plan = plan_project(&opted_out, "demo").unwrap();
        assert!(!plan
            .file_paths()
            .contains(&Path::new("src/config/queryClient.ts")));
    }

    #[test]
    fn test_fixed_files_always_present() {
        for config in all_configs() {
            let plan = plan_project(&config, "demo").unwrap();
            let files = plan.file_paths();

            for path in [
                "src/modules/.gitkeep",
                "src/assets/.gitkeep",
                "package.json",
                "tsconfig.json",
                "app.json",
                ".gitignore",
                ".eslintrc.js",
                ".prettierrc",
                ".prettierignore",
                "src/services/api.ts",
            ] {
                assert!(files.contains(&Path::new(path)), "missing {}", path);
            }
            for folder in INDEX_FOLDERS {
                let index = format!("{}/index.ts", folder);
                assert!(files.contains(&Path::new(&index)), "missing {}", index);
            }
        }
    }

    #[test]
    fn test_ignore_files_have_no_trailing_newline() {
        let plan = plan_project(&ScaffoldConfig::default(), "demo").unwrap();

        let gitignore = plan.file_content(".gitignore").unwrap();
        assert!(gitignore.starts_with("node_modules/"));
        assert!(!gitignore.ends_with('\n'));

        let prettierignore = plan.file_content(".prettierignore").unwrap();
        assert!(!prettierignore.ends_with('\n'));
    }

    #[test]
    fn test_store_index_reexports_per_choice() {
        let redux = ScaffoldConfig::default();
        let plan = plan_project(&redux, "demo").unwrap();
        assert_eq!(
            plan.file_content("src/store/index.ts").unwrap(),
            "export * from './store';\nexport * from './hooks';\nexport * from './authSlice';"
        );

        let zustand = ScaffoldConfig {
            state_management: StateManagement::Zustand,
            ..ScaffoldConfig::default()
        };
        let plan = plan_project(&zustand, "demo").unwrap();
        assert_eq!(
            plan.file_content("src/store/index.ts").unwrap(),
            "export * from './authStore';"
        );
    }
}
