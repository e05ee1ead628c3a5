//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xdtemplates_core::template::grammar::{
    DEFAULT_ENCODED_POSTFIX, DEFAULT_ENCODED_PREFIX, DEFAULT_POSTFIX, DEFAULT_PREFIX,
};

#[derive(Parser)]
#[command(name = "xdtemplates")]
#[command(version, about = "XD Templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate.
    #[command(subcommand)]
    Gen(GenCommands),

    /// List the jobs configured in the options catalog
    List {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Subcommand)]
pub enum GenCommands {
    /// Immediately runs the generate operation with the parameters given.
    Direct(DirectArgs),

    /// Opens the interactive menu.
    Menu {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        report: ReportArgs,
    },
}

#[derive(Args)]
pub struct DirectArgs {
    /// The template folder
    #[arg(short = 't', long)]
    pub template_folder: PathBuf,

    /// The output folder, created if missing
    #[arg(short = 'o', long)]
    pub output_folder: PathBuf,

    /// The variables file
    #[arg(short = 'v', long = "vars")]
    pub vars: PathBuf,

    /// File name pattern selecting templates, e.g. "*.html"
    #[arg(short = 'p', long)]
    pub pattern: String,

    /// Prefix of plain placeholders
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Postfix of plain placeholders
    #[arg(long, default_value = DEFAULT_POSTFIX)]
    pub postfix: String,

    /// Prefix of HTML-encoded placeholders
    #[arg(long, default_value = DEFAULT_ENCODED_PREFIX)]
    pub html_prefix: String,

    /// Postfix of HTML-encoded placeholders
    #[arg(long, default_value = DEFAULT_ENCODED_POSTFIX)]
    pub html_postfix: String,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Options catalog (defaults to Options.xml next to the executable)
    #[arg(long, env = "XDTEMPLATES_OPTIONS")]
    pub options: Option<PathBuf>,
}

#[derive(Args, Clone, Copy)]
pub struct ReportArgs {
    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 2 if any placeholder was left unresolved
    #[arg(long)]
    pub deny_unresolved: bool,
}
