//! Command-line interface for contour.
//!
//! This module handles CLI argument parsing and dispatch. The commands
//! themselves live in the [`commands`] submodule.

pub mod commands;

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// contour - configuration and input binding tool for the contour terminal
#[derive(Parser)]
#[command(name = "contour")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to use instead of the per-user default
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set log level (overrides RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the fully documented default configuration
    GenerateConfig {
        /// Output file (default: stdout)
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Load the configuration and report every problem found in it
    CheckConfig,

    /// List profile names; the default profile is marked with `*`
    ListProfiles,

    /// Print the actions bound to an input event
    Lookup(LookupArgs),

    /// Reload and re-check the configuration whenever the file changes
    Watch,
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("trigger")
        .required(true)
        .args(["key", "character", "mouse"])
))]
pub struct LookupArgs {
    /// Named key (`Enter`, `F5`) or a single character, optionally with
    /// modifiers in front (`Control+Shift+End`, `Control++`)
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    /// Character trigger, even where it spells a key name
    #[arg(long = "char", value_name = "CHAR")]
    pub character: Option<char>,

    /// Mouse button or wheel direction (`Left`, `WheelUp`)
    #[arg(long, value_name = "BUTTON")]
    pub mouse: Option<String>,

    /// Held modifiers, e.g. `Control+Shift`
    #[arg(long, default_value = "", value_name = "MODS")]
    pub mods: String,

    /// Active terminal modes, e.g. `Select|Insert`
    #[arg(long, default_value = "", value_name = "MODES")]
    pub modes: String,
}

/// Parse the command line, run the command and return the process exit code.
pub fn process_cli() -> i32 {
    let cli = Cli::parse();
    crate::logging::init(cli.log_level.map(LogLevelArg::to_level_filter));

    let source = match cli.config {
        Some(path) => commands::ConfigSource::Path(path),
        None => commands::ConfigSource::UserDefault,
    };
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::GenerateConfig { output } => {
            commands::generate_config(output.as_deref(), &mut stdout)
        }
        Commands::CheckConfig => commands::check_config(&source, &mut stdout),
        Commands::ListProfiles => commands::list_profiles(&source, &mut stdout),
        Commands::Lookup(args) => commands::lookup(&source, &args, &mut stdout),
        Commands::Watch => commands::watch(&source, &mut stdout),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("contour: error: {e:#}");
            1
        }
    }
}
