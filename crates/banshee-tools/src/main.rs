//! banshee CLI - Expo React Native project scaffolding

use anyhow::Result;
use banshee_core::tui::{self, InitOptions};
use banshee_core::{EntityKind, Navigation, StateManagement};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "banshee")]
#[command(about = "CLI to generate Expo React Native projects")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Name of the project
    pub project_name: Option<String>,

    #[command(flatten)]
    pub init: InitFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Args, Debug)]
pub struct InitFlags {
    /// Navigation library to wire in
    #[arg(long, value_enum)]
    pub navigation: Option<Navigation>,

    /// State management library to wire in
    #[arg(long = "state", value_enum)]
    pub state_management: Option<StateManagement>,

    /// Add TanStack Query (true/false)
    #[arg(long = "tanstack")]
    pub tanstack: Option<bool>,

    /// Skip npm install after generating the project
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<InitFlags> for InitOptions {
    fn from(flags: InitFlags) -> Self {
        InitOptions {
            navigation: flags.navigation,
            state_management: flags.state_management,
            query_cache: flags.tanstack,
            skip_install: flags.skip_install,
            yes: flags.yes,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new module with screens, controllers, and navigations
    AddModule { name: String },
    /// Generate a new screen in src/screens
    AddScreen { name: String },
    /// Generate a new component in src/components
    AddComponent { name: String },
    /// Generate a new service in src/services
    AddService { name: String },
    /// Generate a new custom hook in src/hooks
    AddHook { name: String },
    /// List all available modules
    ListModules,
    /// Show project information
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::AddModule { name }) => tui::run_add(EntityKind::Module, &name).await,
        Some(Command::AddScreen { name }) => tui::run_add(EntityKind::Screen, &name).await,
        Some(Command::AddComponent { name }) => tui::run_add(EntityKind::Component, &name).await,
        Some(Command::AddService { name }) => tui::run_add(EntityKind::Service, &name).await,
        Some(Command::AddHook { name }) => tui::run_add(EntityKind::Hook, &name).await,
        Some(Command::ListModules) => tui::run_list_modules(),
        Some(Command::Info) => tui::run_info(),
        None => match args.project_name {
            Some(project_name) => {
                let result = tui::run_init(&project_name, args.init.into()).await;

                // Ensure cursor is visible on normal exit
                let _ = console::Term::stderr().show_cursor();

                result
            }
            None => {
                Args::command().print_help()?;
                Ok(())
            }
        },
    }
}
