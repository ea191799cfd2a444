//! CLI argument definitions for `skugen`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "skugen",
    version,
    about = "Generate SKUs for every attribute combination of a variable product",
    long_about = "Generate SKUs for every attribute combination of a variable product.\n\n\
                  Products are read from a JSON document or a folder holding\n\
                  product.csv, axes.csv and an optional variations.csv."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every combination with its generated SKU.
    Generate(GenerateArgs),

    /// List the axes that take part in generation.
    Axes(ProductArgs),

    /// Write the combinations to a CSV file and print its digest.
    Export(ExportArgs),
}

/// Product source and generator options shared by every command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product JSON file or product folder.
    #[arg(value_name = "PRODUCT")]
    pub product: PathBuf,

    /// Generator configuration file (TOML). Falls back to $SKUGEN_CONFIG.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reject products with more combinations than this.
    #[arg(long = "max-combinations", value_name = "N")]
    pub max_combinations: Option<usize>,

    /// Only use terms that carry a suffix.
    #[arg(long = "require-suffix")]
    pub require_suffix: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub product: ProductArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write to a file instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub product: ProductArgs,

    /// Directory for the CSV file.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
