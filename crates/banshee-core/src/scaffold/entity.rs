//! Single-entity plans appended into an existing project

use super::plan::GenerationPlan;
use super::templates;
use std::fmt;
use std::path::PathBuf;

/// Sub-folders every module starts with
const MODULE_FOLDERS: &[&str] = &["screens", "controllers", "navigations"];

/// Kinds of boilerplate that can be added to a generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Component,
    Screen,
    Service,
    Hook,
    Module,
}

impl EntityKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Component => "Component",
            EntityKind::Screen => "Screen",
            EntityKind::Service => "Service",
            EntityKind::Hook => "Hook",
            EntityKind::Module => "Module",
        }
    }

    /// Lowercase noun used in progress messages
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Component => "component",
            EntityKind::Screen => "screen",
            EntityKind::Service => "service",
            EntityKind::Hook => "hook",
            EntityKind::Module => "module",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Final entity name after kind-specific normalization.
///
/// Hooks get a `use` prefix unless already present; normalization is
/// idempotent.
pub fn entity_name(kind: EntityKind, raw: &str) -> String {
    match kind {
        EntityKind::Hook if !raw.starts_with("use") => format!("use{}", raw),
        _ => raw.to_string(),
    }
}

/// Path that must not pre-exist for this entity, relative to the project root
pub fn target_path(kind: EntityKind, raw: &str) -> PathBuf {
    let name = entity_name(kind, raw);
    match kind {
        EntityKind::Component => PathBuf::from(format!("src/components/{}.tsx", name)),
        EntityKind::Screen => PathBuf::from(format!("src/screens/{}.tsx", name)),
        EntityKind::Service => PathBuf::from(format!("src/services/{}.ts", name)),
        EntityKind::Hook => PathBuf::from(format!("src/hooks/{}.ts", name)),
        EntityKind::Module => PathBuf::from(format!("src/modules/{}", name)),
    }
}

/// Compute the operation list adding one entity to an existing project.
///
/// Pure, like project planning; the existence guard lives with the caller
/// (`realize_into` checks `target_path`).
pub fn plan_entity(kind: EntityKind, raw: &str) -> GenerationPlan {
    let name = entity_name(kind, raw);
    let mut plan = GenerationPlan::new();

    match kind {
        EntityKind::Component => {
            plan.push_file(
                target_path(kind, raw),
                templates::render_named(templates::COMPONENT, &name),
            );
        }
        EntityKind::Screen => {
            plan.push_file(
                target_path(kind, raw),
                templates::render_named(templates::SCREEN, &name),
            );
        }
        EntityKind::Service => {
            plan.push_file(
                target_path(kind, raw),
                templates::render_service(templates::SERVICE, &name),
            );
        }
        EntityKind::Hook => {
            plan.push_file(
                target_path(kind, raw),
                templates::render_named(templates::HOOK, &name),
            );
        }
        EntityKind::Module => {
            let root = PathBuf::from("src/modules").join(&name);
            plan.push_dir(root.clone());
            for folder in MODULE_FOLDERS {
                let folder_path = root.join(folder);
                plan.push_dir(folder_path.clone());
                plan.push_file(folder_path.join("index.ts"), "");
            }
            plan.push_file(root.join("index.ts"), "");
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_hook_name_gets_use_prefix() {
        assert_eq!(entity_name(EntityKind::Hook, "Fetch"), "useFetch");
        assert_eq!(entity_name(EntityKind::Hook, "useFetch"), "useFetch");
        assert_eq!(entity_name(EntityKind::Screen, "Fetch"), "Fetch");
    }

    #[test]
    fn test_target_paths_per_kind() {
        assert_eq!(
            target_path(EntityKind::Component, "Card"),
            Path::new("src/components/Card.tsx")
        );
        assert_eq!(
            target_path(EntityKind::Screen, "Home"),
            Path::new("src/screens/Home.tsx")
        );
        assert_eq!(
            target_path(EntityKind::Service, "UserService"),
            Path::new("src/services/UserService.ts")
        );
        assert_eq!(
            target_path(EntityKind::Hook, "Auth"),
            Path::new("src/hooks/useAuth.ts")
        );
        assert_eq!(
            target_path(EntityKind::Module, "auth"),
            Path::new("src/modules/auth")
        );
    }

    #[test]
    fn test_single_file_plans_embed_the_name() {
        let plan = plan_entity(EntityKind::Screen, "Profile");
        assert_eq!(plan.len(), 1);
        let content = plan.file_content("src/screens/Profile.tsx").unwrap();
        assert!(content.contains("export default function Profile()"));

        let plan = plan_entity(EntityKind::Component, "Card");
        let content = plan.file_content("src/components/Card.tsx").unwrap();
        assert!(content.contains("CardProps"));

        let plan = plan_entity(EntityKind::Service, "UserService");
        let content = plan.file_content("src/services/UserService.ts").unwrap();
        assert!(content.contains("`${API_URL}/userservice`"));
    }

    #[test]
    fn test_hook_plan_uses_normalized_name_in_body() {
        let plan = plan_entity(EntityKind::Hook, "Auth");
        let content = plan.file_content("src/hooks/useAuth.ts").unwrap();
        assert!(content.contains("export const useAuth = ()"));
    }

    #[test]
    fn test_module_plan_layout() {
        let plan = plan_entity(EntityKind::Module, "auth");

        let dirs = plan.dir_paths();
        assert_eq!(
            dirs,
            vec![
                Path::new("src/modules/auth"),
                Path::new("src/modules/auth/screens"),
                Path::new("src/modules/auth/controllers"),
                Path::new("src/modules/auth/navigations"),
            ]
        );

        let files = plan.file_paths();
        assert_eq!(files.len(), 4);
        assert!(files.contains(&Path::new("src/modules/auth/index.ts")));
        assert!(files.contains(&Path::new("src/modules/auth/screens/index.ts")));
        assert!(files.contains(&Path::new("src/modules/auth/controllers/index.ts")));
        assert!(files.contains(&Path::new("src/modules/auth/navigations/index.ts")));
        for path in files {
            assert_eq!(plan.file_content(path), Some(""));
        }
    }
}
