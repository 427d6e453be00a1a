use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use docset_core::QuoteStyle;

#[derive(Parser)]
#[command(name = "docset")]
#[command(about = "Format category sets into wrapped documentation prose")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.docset)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Quote {
    /// 'name'
    Plain,
    /// ``'name'`` (reStructuredText literal)
    Rst,
}

impl From<Quote> for QuoteStyle {
    fn from(quote: Quote) -> Self {
        match quote {
            Quote::Plain => QuoteStyle::Plain,
            Quote::Rst => QuoteStyle::Rst,
        }
    }
}

/// Overrides for the `[format]` section of config.toml
#[derive(Args, Debug, Clone, Default)]
pub struct FormatArgs {
    /// Tabs inserted after every line break
    #[arg(short, long, allow_negative_numbers = true)]
    pub indent: Option<i64>,

    /// Maximum line width
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Quoting of category names
    #[arg(long, value_enum)]
    pub quote: Option<Quote>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format category names as a wrapped enumeration
    Format {
        /// Category names (unioned with --set)
        categories: Vec<String>,

        /// Include all members of a named set (repeatable)
        #[arg(short, long = "set", value_name = "NAME")]
        sets: Vec<String>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Inspect category sets
    Sets {
        #[command(subcommand)]
        action: SetsAction,
    },

    /// Render a documentation template (default: builtin particle doc)
    Render {
        /// Template file with {placeholder} fields
        template: Option<PathBuf>,

        /// Bind a placeholder to a set (e.g. --bind notes=periodic-table)
        #[arg(short, long, value_name = "PLACEHOLDER=SET")]
        bind: Vec<String>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum SetsAction {
    /// List all category sets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the members of a set
    Show {
        /// Set name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., format.width, sets.flavors)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., format.width, sets.flavors)
        key: String,
        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Initialize config file with defaults
    Init,

    /// Show config file path
    Path,
}
