// CLI module - command-line argument parsing and handlers
//
// Provides run flags plus subcommands for configuration management:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::fs;

/// onepage - a one-page marketing site that lives in your terminal
#[derive(Parser)]
#[command(name = "onepage")]
#[command(version = VERSION)]
#[command(about = "A one-page site rendered in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reveal every section immediately (skip entrance animations)
    #[arg(long)]
    pub reduced_motion: bool,

    /// Theme override: "dark" or "light"
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Flags that carry over into a normal run.
pub struct RunFlags {
    pub reduced_motion: bool,
    pub theme: Option<String>,
}

/// Parse the command line. Returns `None` when a subcommand was handled and
/// the process should exit; otherwise the flags for a normal run.
pub fn handle_cli() -> Option<RunFlags> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, path, reset }) => {
            if path {
                handle_config_path();
            } else if reset {
                handle_config_reset();
            } else if show {
                handle_config_show();
            } else {
                println!("Usage: onepage config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
            }
            None
        }
        None => Some(RunFlags {
            reduced_motion: cli.reduced_motion,
            theme: cli.theme,
        }),
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::load();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("use_theme_background = {}", config.use_theme_background);
    println!("tick_ms = {}", config.tick_ms);
    println!("reduced_motion = {}", config.reduced_motion);
    println!("desktop_breakpoint = {}", config.desktop_breakpoint);
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };
    if let Some(parent) = path.parent() {
        if let Err(error) = fs::create_dir_all(parent) {
            eprintln!("Error: Could not create config directory: {error}");
            std::process::exit(1);
        }
    }
    match fs::write(&path, Config::default_toml()) {
        Ok(()) => println!("Config reset: {}", path.display()),
        Err(error) => {
            eprintln!("Error: Could not write config file: {error}");
            std::process::exit(1);
        }
    }
}
