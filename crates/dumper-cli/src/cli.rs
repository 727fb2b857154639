//! CLI definition using clap

use clap::{Parser, Subcommand};
use dumper_types::{OutputFormat, UnitSystem};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dumper-trip")]
#[command(version)]
#[command(about = "Convert excavation dimensions into dumper trips and haulage cost")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Unit the dimensions are entered in. Uses config value if not specified.
    #[arg(long, short = 'u', global = true)]
    pub unit: Option<UnitSystem>,

    /// Dumper capacity in cubic meters (overrides config)
    #[arg(long, global = true)]
    pub capacity: Option<f64>,

    /// Cost per trip (overrides config; unparseable text counts as 0)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub cost: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file path override
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate trips and cost for one excavation
    Calculate {
        /// Excavation length
        #[arg(allow_hyphen_values = true)]
        length: String,

        /// Excavation width
        #[arg(allow_hyphen_values = true)]
        width: String,

        /// Excavation height (depth)
        #[arg(allow_hyphen_values = true)]
        height: String,
    },

    /// Line-mode calculator session on stdin
    Interactive,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set dumper capacity in cubic meters
        #[arg(long)]
        set_capacity: Option<f64>,

        /// Set cost per trip
        #[arg(long, allow_hyphen_values = true)]
        set_cost: Option<String>,

        /// Set default unit system
        #[arg(long)]
        set_unit: Option<UnitSystem>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency symbol
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
