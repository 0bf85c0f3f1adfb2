//! habitica-badge - CLI entry point
//!
//! Fetches Habitica progress once and writes badge artifacts. Meant to be
//! invoked by an external scheduler (for example a CI cron job that then
//! publishes the output directory).

use habitica_badge::config::{default, loader::ConfigLoader, xdg};
use habitica_badge::error::EXIT_UNHANDLED;
use habitica_badge::{generator, logging, BadgeError, OutputFormat, Overrides, Settings};
use habitica_api::{Credentials, ProgressSnapshot};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Habitica level progress badge generator
#[derive(Parser)]
#[command(name = "habitica-badge")]
#[command(version, about = "Render a Habitica level progress badge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the habitica-badge CLI
#[derive(Subcommand)]
enum Commands {
    /// Fetch progress from Habitica and write the badge artifacts
    Generate {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write badge artifacts from given values, without contacting Habitica
    Render {
        /// Current level
        #[arg(long)]
        level: u32,
        /// Current experience points
        #[arg(long, allow_negative_numbers = true)]
        exp: f64,
        /// Experience needed for the next level
        #[arg(long, allow_negative_numbers = true)]
        to_next: f64,
        /// Character class
        #[arg(long)]
        class: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options shared by the commands that write artifacts.
#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Configuration file (default: $XDG_CONFIG_HOME/habitica-badge/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory (overrides output.dir)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Artifact formats to write (overrides output.formats)
    #[arg(long, value_enum, value_delimiter = ',')]
    format: Vec<OutputFormat>,
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate {
        /// Configuration file to validate
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match cli.command {
        Commands::Generate { output } => run_generate(output),
        Commands::Render {
            level,
            exp,
            to_next,
            class,
            output,
        } => {
            let snapshot = ProgressSnapshot::new(level, exp, to_next).with_class(class);
            run_render(&snapshot, output)
        }
        Commands::Config { action } => run_config(action),
    }
}

/// Loads the config file and applies CLI overrides.
fn resolve_settings(output: OutputArgs) -> Result<Settings, BadgeError> {
    let config = ConfigLoader::load(output.config.as_deref())?;
    let overrides = Overrides {
        out_dir: output.out_dir,
        formats: output.format,
    };
    Ok(Settings::from_env(config, overrides)?)
}

fn run_generate(output: OutputArgs) -> ExitCode {
    // Both checks happen before any network activity.
    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => return fail(&BadgeError::Config(e.into())),
    };
    let settings = match resolve_settings(output) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return ExitCode::from(EXIT_UNHANDLED);
        }
    };

    match runtime.block_on(generator::generate(&settings, &credentials)) {
        Ok(report) => {
            for path in &report.paths {
                println!("Generated {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_render(snapshot: &ProgressSnapshot, output: OutputArgs) -> ExitCode {
    let result = resolve_settings(output)
        .and_then(|settings| generator::render_offline(snapshot, &settings));
    match result {
        Ok(report) => {
            for path in &report.paths {
                println!("Generated {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_config(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => default::create_default_config(force).map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate { config } => ConfigLoader::load(config.as_deref()).map(|config| {
            println!("Configuration is valid");
            println!("{config:#?}");
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&BadgeError::Config(e)),
    }
}

/// Reports `err` on stderr and maps it to the exit-code policy.
fn fail(err: &BadgeError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::from(err)
}
