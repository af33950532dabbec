//! Template bodies embedded at compile time
//!
//! Project bodies land verbatim in the generated tree; entity bodies carry
//! `{{name}}` and `{{route}}` markers substituted at plan time.

/// Root layout for the Expo Router choice
pub const LAYOUT_EXPO_ROUTER: &str =
    include_str!("../../templates/project/layout_expo_router.tsx");

/// Root layout for the React Navigation choice
pub const LAYOUT_REACT_NAVIGATION: &str =
    include_str!("../../templates/project/layout_react_navigation.tsx");

/// Home screen, generated only alongside Expo Router
pub const HOME_SCREEN: &str = include_str!("../../templates/project/home_screen.tsx");

/// Axios client with auth and toast interceptors
pub const API_CLIENT: &str = include_str!("../../templates/project/api_client.ts");

/// TanStack Query client configuration
pub const QUERY_CLIENT: &str = include_str!("../../templates/project/query_client.ts");

/// Redux auth slice
pub const AUTH_SLICE: &str = include_str!("../../templates/project/auth_slice.ts");

/// Redux store wiring
pub const REDUX_STORE: &str = include_str!("../../templates/project/redux_store.ts");

/// Typed Redux hooks
pub const REDUX_HOOKS: &str = include_str!("../../templates/project/redux_hooks.ts");

/// Zustand auth store
pub const AUTH_STORE: &str = include_str!("../../templates/project/auth_store.ts");

/// Barrel file re-exporting the Redux store pieces
pub const REDUX_INDEX: &str =
    "export * from './store';\nexport * from './hooks';\nexport * from './authSlice';";

/// Barrel file re-exporting the Zustand store
pub const ZUSTAND_INDEX: &str = "export * from './authStore';";

/// .gitignore body; trimmed of surrounding whitespace at plan time
pub const GITIGNORE: &str = include_str!("../../templates/project/gitignore");

/// .eslintrc.js body
pub const ESLINTRC: &str = include_str!("../../templates/project/eslintrc.js");

/// .prettierignore body; trimmed of surrounding whitespace at plan time
pub const PRETTIERIGNORE: &str = include_str!("../../templates/project/prettierignore");

/// Screen boilerplate
pub const SCREEN: &str = include_str!("../../templates/entity/screen.tsx");

/// Component boilerplate with a props interface
pub const COMPONENT: &str = include_str!("../../templates/entity/component.tsx");

/// Service boilerplate with fetch-based CRUD calls
pub const SERVICE: &str = include_str!("../../templates/entity/service.ts");

/// Hook boilerplate with state and effect wiring
pub const HOOK: &str = include_str!("../../templates/entity/hook.ts");

/// Substitute the `{{name}}` marker in an entity body
pub fn render_named(template: &str, name: &str) -> String {
    template.replace("{{name}}", name)
}

/// Substitute `{{name}}` and the lowercased `{{route}}` segment in the service body
pub fn render_service(template: &str, name: &str) -> String {
    template
        .replace("{{name}}", name)
        .replace("{{route}}", &name.to_lowercase())
}
