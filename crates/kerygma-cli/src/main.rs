//! Kerygma CLI
//!
//! Command-line interface for content detection, resolution, and export.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kerygma_cli::KerygmaConfig;
use kerygma_cli::commands;
use kerygma_cli::config::LOG_ENV;

/// Kerygma - generated content inspection tool
#[derive(Parser, Debug)]
#[command(name = "kerygma", author, version)]
#[command(about = "Detect, normalize, and export generated church content", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the detected content type and the signal that decided it
    Detect {
        /// Payload file (stdin when omitted)
        file: Option<PathBuf>,
        /// Declared content type label
        #[arg(short = 't', long = "type")]
        declared: Option<String>,
    },
    /// Print the full resolution as JSON
    Resolve {
        /// Payload file (stdin when omitted)
        file: Option<PathBuf>,
        /// Declared content type label
        #[arg(short = 't', long = "type")]
        declared: Option<String>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the canonical record as plain text
    Export {
        /// Payload file (stdin when omitted)
        file: Option<PathBuf>,
        /// Declared content type label
        #[arg(short = 't', long = "type")]
        declared: Option<String>,
        /// Print only the title and a short preview
        #[arg(long)]
        preview: bool,
    },
    /// List the content type catalog
    Types,
    /// Config file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show the config file path
    Path,
    /// Show the effective configuration
    Show,
    /// Create a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(config: &KerygmaConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = KerygmaConfig::load(args.config.as_deref())?;
    init_logging(&config, args.verbose);

    let default_type = config.default_type.as_deref();

    match args.command {
        Command::Detect { file, declared } => {
            let input = commands::read_input(file.as_deref())?;
            println!(
                "{}",
                commands::cmd_detect(&input, declared.as_deref().or(default_type))?
            );
        }
        Command::Resolve {
            file,
            declared,
            pretty,
        } => {
            let input = commands::read_input(file.as_deref())?;
            let (resolution, json) = commands::cmd_resolve(
                &input,
                declared.as_deref().or(default_type),
                pretty || config.pretty,
            )?;
            println!("{json}");
            if commands::strict_rejects(&config, &resolution) {
                tracing::warn!(
                    content_type = %resolution.content_type,
                    "No renderer for payload (strict mode)"
                );
                return Ok(ExitCode::from(2));
            }
        }
        Command::Export {
            file,
            declared,
            preview,
        } => {
            let input = commands::read_input(file.as_deref())?;
            let declared = declared.as_deref().or(default_type);
            let text = if preview {
                commands::cmd_preview(&input, declared, config.preview_chars)?
            } else {
                commands::cmd_export(&input, declared)?
            };
            println!("{text}");
        }
        Command::Types => println!("{}", commands::cmd_types()),
        Command::Config { action } => match action {
            ConfigAction::Path => {
                let path = commands::cmd_config_path(args.config.as_deref())?;
                println!("{}", path.display());
                if !path.exists() {
                    eprintln!("(file does not exist, run `kerygma config init` to create it)");
                }
            }
            ConfigAction::Show => {
                print!("{}", commands::cmd_config_show(args.config.as_deref())?);
            }
            ConfigAction::Init { force } => {
                let path = commands::cmd_config_init(args.config.as_deref(), force)?;
                println!("Config file created at {}", path.display());
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
