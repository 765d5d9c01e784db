//! gel compiles templates of literal text mixed with embedded Go code into
//! Go source. Each template becomes one function that writes the text,
//! with interpolated values substituted, to an `io.Writer`.

/// Command-line interface module for the gel application
pub mod cli;

/// Run-level compilation of all loaded templates
pub mod compiler;

/// Common constants: delimiters, option names, default values
pub mod constants;

/// Go source generation
pub mod emitter;

/// Error types and handling for gel
pub mod error;

/// Template header (`name: value` block) parsing
pub mod header;

/// Go import set accumulation
pub mod imports;

/// Template input loading from files, directories and stdin
pub mod loader;

/// Logger setup
pub mod logger;

/// Rendering templates directly against a JSON context
pub mod preview;

/// Template body scanning into segments
pub mod scanner;

/// Segment kinds produced by the scanner
pub mod segment;

/// Whole-template parsing
pub mod template;
