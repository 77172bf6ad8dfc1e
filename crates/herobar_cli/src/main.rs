//! Herobar CLI
//!
//! Drive a hero header through a range of scroll offsets on a headless
//! screen, and check configuration files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod sweep;

use herobar_header::HeroConfig;

#[derive(Parser)]
#[command(name = "herobar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Herobar hero header tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scroll a header through a range of offsets and print every tick
    Sweep {
        /// Configuration file (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Content height at rest
        #[arg(long, default_value = "200")]
        height: f32,

        /// Floor while collapsing
        #[arg(long, default_value = "0")]
        min_height: f32,

        /// Disable overscroll stretching
        #[arg(long)]
        no_stretch: bool,

        /// Large-title placement
        #[arg(long, value_enum, default_value = "none")]
        large_title: LargeTitleArg,

        /// Header title
        #[arg(long, default_value = "Albums")]
        title: String,

        /// Offset past rest to start from (pull-down distance)
        #[arg(long, default_value = "40")]
        overscroll: f32,

        /// Offset step between ticks
        #[arg(long, default_value = "10")]
        step: f32,
    },

    /// Parse and validate a configuration file
    CheckConfig {
        /// Path to the TOML file
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LargeTitleArg {
    None,
    Below,
    Inline,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Sweep {
            config,
            height,
            min_height,
            no_stretch,
            large_title,
            title,
            overscroll,
            step,
        } => {
            let config = load_config(config.as_deref())?;
            let options = sweep::SweepOptions {
                height,
                min_height,
                stretches: !no_stretch,
                large_title,
                title,
                overscroll,
                step,
            };
            let report = sweep::run(config, &options)?;
            print!("{report}");
            Ok(())
        }

        Commands::CheckConfig { path } => cmd_check_config(&path),
    }
}

fn load_config(path: Option<&Path>) -> Result<HeroConfig> {
    match path {
        Some(path) => {
            let config = HeroConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(HeroConfig::default()),
    }
}

fn cmd_check_config(path: &Path) -> Result<()> {
    // Loading validates
    let config = load_config(Some(path))?;
    info!("{} is valid", path.display());
    println!("{}", config.to_toml_string());
    Ok(())
}
