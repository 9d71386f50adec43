pub mod defaults;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Every flag is optional; with none the default comparison is printed.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pi-precision")]
#[command(about = "Compare truncated and rounded pi through the volume of a cylinder")]
pub struct CliConfig {
    /// TOML file overriding radius, height, decimal counts or precision
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per stage")]
    pub monitor: bool,
}
