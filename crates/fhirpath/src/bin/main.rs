//! FHIRPath command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use fhirpath::cli::output::{self, ColorMode, OutputFormat};
use fhirpath::cli::{compare, parse, parse_kind, type_of};
use std::path::PathBuf;

/// FHIRPath value and type tool
#[derive(Parser)]
#[command(name = "fhirpath")]
#[command(author, version, about = "FHIRPath value and type tools", long_about = None)]
struct Cli {
    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a System literal
    Parse {
        /// System type (Boolean, Integer, Integer64, Decimal, String)
        kind: String,

        /// Literal text; strings keep their quotes (e.g. "'abc'")
        literal: String,
    },

    /// Compare two System literals of the same type
    Compare {
        /// System type
        kind: String,

        /// Left operand
        left: String,

        /// Right operand
        right: String,
    },

    /// Classify a FHIR resource or element stored as JSON
    Type {
        /// JSON file
        file: PathBuf,

        /// FHIR type of the element (default: the resourceType)
        #[arg(long = "as")]
        as_type: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse { kind, literal } => parse::parse(parse::ParseConfig {
            kind: parse_kind(&kind)?,
            literal,
            format: cli.format,
            output_file: cli.output,
        }),

        Commands::Compare { kind, left, right } => compare::compare(compare::CompareConfig {
            kind: parse_kind(&kind)?,
            left,
            right,
            format: cli.format,
            output_file: cli.output,
        }),

        Commands::Type { file, as_type } => type_of::type_of(type_of::TypeConfig {
            file,
            as_type,
            format: cli.format,
            output_file: cli.output,
        }),
    }
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(cli.color);
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
