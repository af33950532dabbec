//! Command flows wiring prompts, planning, and realization together

use crate::error::ScaffoldError;
use crate::inspect;
use crate::install;
use crate::realize;
use crate::scaffold::{self, EntityKind};
use crate::tui::prompts::{self, InitOptions};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Create a new project in `<cwd>/<project_name>`.
pub async fn run_init(project_name: &str, opts: InitOptions) -> Result<()> {
    cliclack::intro(format!("Creating a new Expo app: {}", project_name))?;

    let target = std::env::current_dir()?.join(project_name);
    if target.exists() {
        cliclack::log::error(format!("Directory {} already exists!", project_name))?;
        return Err(ScaffoldError::TargetExists { path: target }.into());
    }

    let config = prompts::resolve_config(&opts)?;
    let plan = scaffold::plan_project(&config, project_name)?;

    let spinner = cliclack::spinner();
    spinner.start("Creating project structure...");
    match realize::realize(&plan, &target).await {
        Ok(()) => spinner.stop("Project structure created!"),
        Err(e) => {
            spinner.stop("Failed to create project");
            return Err(e);
        }
    }

    if opts.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
    } else {
        install_step(&target).await?;
    }

    print_next_steps(project_name)
}

async fn install_step(target: &Path) -> Result<()> {
    if install::npm_version().is_none() {
        cliclack::log::error("npm is not installed")?;
        anyhow::bail!("Install Node.js from https://nodejs.org and try again.");
    }

    let spinner = cliclack::spinner();
    spinner.start("Installing dependencies...");
    match install::install_dependencies(target).await {
        Ok(()) => {
            spinner.stop("Dependencies installed!");
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to install dependencies");
            Err(e)
        }
    }
}

fn print_next_steps(project_name: &str) -> Result<()> {
    cliclack::log::success(format!(
        "✨ Project {} created successfully!",
        project_name
    ))?;

    println!();
    println!("  To get started:");
    println!();
    println!("  cd {}", project_name);
    println!("  npx expo start");
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Add one entity to the project in the current directory.
pub async fn run_add(kind: EntityKind, raw_name: &str) -> Result<()> {
    let root = std::env::current_dir()?;
    let name = scaffold::entity_name(kind, raw_name);
    let guard = scaffold::target_path(kind, raw_name);

    if root.join(&guard).exists() {
        cliclack::log::error(format!("{} {} already exists!", kind.display_name(), name))?;
        return Err(ScaffoldError::TargetExists {
            path: root.join(&guard),
        }
        .into());
    }

    cliclack::log::info(format!("Creating {}: {}", kind.noun(), name))?;

    let plan = scaffold::plan_entity(kind, raw_name);
    realize::realize_into(&plan, &root, &guard).await?;

    cliclack::log::success(format!(
        "{} {} created successfully!",
        kind.display_name(),
        name
    ))?;
    cliclack::log::info(format!("Location: {}", guard.display()))?;

    Ok(())
}

/// Print the module listing for the project in the current directory.
pub fn run_list_modules() -> Result<()> {
    let root = std::env::current_dir()?;

    let entries = match inspect::list_modules(&root) {
        Ok(entries) => entries,
        Err(e) => {
            if matches!(
                e.downcast_ref::<ScaffoldError>(),
                Some(ScaffoldError::MissingModulesDir { .. })
            ) {
                cliclack::log::error("src/modules directory not found!")?;
                cliclack::log::info("Make sure you are in the project root directory.")?;
            }
            return Err(e);
        }
    };

    if entries.is_empty() {
        cliclack::log::info("No modules found.")?;
        cliclack::log::info("Create one with: npx banshee add-module <module-name>")?;
        return Ok(());
    }

    println!();
    println!("{}", "Available Modules:".blue());
    println!();
    for (index, entry) in entries.iter().enumerate() {
        println!("  {}. {}", index + 1, entry.name.green());
        if !entry.folders.is_empty() {
            println!("     {} {}", "└─".dimmed(), entry.folders.join(", "));
        }
    }
    println!();

    Ok(())
}

/// Print the project summary for the current directory.
pub fn run_info() -> Result<()> {
    let root = std::env::current_dir()?;

    let info = match inspect::read_project_info(&root) {
        Ok(info) => info,
        Err(e) => {
            if matches!(
                e.downcast_ref::<ScaffoldError>(),
                Some(ScaffoldError::MissingManifest { .. })
            ) {
                cliclack::log::error("package.json not found!")?;
                cliclack::log::info("Make sure you are in the project root directory.")?;
            }
            return Err(e);
        }
    };

    println!();
    println!("{}", "📦 Project Information:".blue());
    println!();
    println!("  {} {}", "Name:".bold(), info.name);
    println!("  {} {}", "Version:".bold(), info.version);
    println!(
        "  {} {}",
        "Navigation:".bold(),
        info.navigation
            .map(|n| n.display_name())
            .unwrap_or("Not configured")
    );
    println!("  {} {}", "State Management:".bold(), info.state_management);
    println!(
        "  {} {}",
        "TanStack Query:".bold(),
        if info.has_query_cache { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "📚 Installed Libraries:".blue());
    println!();
    for (name, version) in &info.installed {
        println!("  {} {} {}", "✓".green(), name, version.dimmed());
    }
    println!();

    Ok(())
}
