//! Command-line interface implementation for gel.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{DEFAULT_INCLUDE, DEFAULT_PACKAGE};
use crate::header::EscapeMode;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for gel.
#[derive(Parser, Debug)]
#[command(author, version, about = "gel: compiles embedded-code templates into Go source", long_about = None)]
pub struct Args {
    /// Template files or directories. Reads one template from stdin when omitted
    #[arg(value_name = "TEMPLATES")]
    pub templates: Vec<PathBuf>,

    /// Package the generated functions belong to
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Escape mode for templates whose header has no `escape` option
    #[arg(short, long, value_enum)]
    pub escape: Option<EscapeMode>,

    /// Glob selecting template files inside directory arguments
    #[arg(short, long, default_value = DEFAULT_INCLUDE)]
    pub include: String,

    /// Write generated source to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Render templates with the JSON context in this file instead of
    /// generating Go source
    #[arg(long, value_name = "CONTEXT")]
    pub preview: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
