//! usersearch CLI
//!
//! Runs the username search form once from the command line, or launches
//! one of the interactive front ends.

use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use usersearch::{
    AppConfig, ModuleRegistry, Router, SearchModule, SubmitEvent,
};

/// usersearch - find a user by username
#[derive(Parser)]
#[command(name = "usersearch")]
#[command(author = "usersearch Contributors")]
#[command(version)]
#[command(about = "Username search form with routed user detail view", long_about = None)]
struct Cli {
    /// Config file (default: usersearch.json next to the executable)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a username once and print the resulting route
    Submit {
        /// Username as typed (use -- before it if it starts with -)
        #[arg(allow_hyphen_values = true)]
        username: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// List the route table and registered feature modules
    Routes,

    /// Interactive terminal UI
    Tui,

    /// Native window
    Gui,
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| {
        usersearch::logging::init(config.log_file.as_deref(), config.log_level);
        usersearch::logging::separator("usersearch starting");

        match cli.command {
            Commands::Submit { username, output } => cmd_submit(username, &output),
            Commands::Routes => cmd_routes(),
            Commands::Tui => usersearch::tui::run(&config).map(|()| true),
            Commands::Gui => usersearch::gui::run(&config).map(|()| true),
        }
    });

    usersearch::logging::flush();

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            usersearch::logging::error("MAIN", &e.to_string());
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> usersearch::Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load(p),
        None => AppConfig::load(&AppConfig::default_path()),
    }
}

/// Host registry with every bundled feature module
fn host_registry() -> usersearch::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::for_host();
    registry.register(Box::new(SearchModule))?;
    Ok(registry)
}

/// Submit command implementation. Returns false when validation fails.
fn cmd_submit(username: String, output_format: &str) -> usersearch::Result<bool> {
    host_registry()?;

    let mut form = SearchModule.create_component(Router::with_default_routes());
    form.on_input(username);
    form.on_submit(&mut SubmitEvent::new());

    let router = form.navigator();
    let navigated = !form.is_input_error && router.last_error().is_none();

    if output_format == "json" {
        let route = router.current_match();
        println!(
            "{}",
            serde_json::json!({
                "username": form.search_query,
                "is_input_error": form.is_input_error,
                "input_error_message": form.input_error_message,
                "url": navigated.then(|| router.current_url()),
                "route": route.as_ref().map(|m| m.pattern.clone()),
            })
        );
    } else if form.is_input_error {
        println!(
            "{} {}",
            style("✗").red().bold(),
            style(&form.input_error_message).red()
        );
    } else if let Some(e) = router.last_error() {
        println!("{} {}", style("✗").red().bold(), e);
    } else {
        println!(
            "{} {}",
            style("→").cyan().bold(),
            style(router.current_url()).cyan()
        );
    }

    Ok(navigated)
}

/// Routes command implementation
fn cmd_routes() -> usersearch::Result<bool> {
    let registry = host_registry()?;
    let router = Router::with_default_routes();

    println!("{}", style("Routes:").bold());
    for route in router.routes() {
        println!("  {} {}", style("•").green(), route.pattern());
    }

    println!();
    println!("{}", style("Modules:").bold());
    for module in registry.modules() {
        let imports = module
            .imports()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {} {} declares [{}] imports [{}]",
            style("•").green(),
            style(module.name()).yellow(),
            module.declarations().join(", "),
            imports
        );
    }

    Ok(true)
}
