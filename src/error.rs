//! Error handling for gel.
//! Defines the error type and result alias used throughout the compiler.

use std::io;
use thiserror::Error;

/// All conditions that can abort compilation of a template or a run.
///
/// The first five variants are parse failures of a single template; the
/// rest come from the collaborators around the compiler (file system,
/// globbing, preview rendering).
#[derive(Error, Debug)]
pub enum Error {
    /// The `---` line separating header and body was not found.
    #[error("Did not find divider between header and body")]
    MissingDivider,

    /// A header line has no `:` separator. `line` is 0-based.
    #[error("Bad header line: {line}")]
    MalformedHeaderLine { line: usize },

    /// A required header option is absent or empty.
    #[error("Missing \"{option}\"")]
    MissingRequiredOption { option: String },

    /// The `escape` option names a mode other than `""` or `html`.
    #[error("Unknown escape type: \"{mode}\"")]
    UnknownEscapeMode { mode: String },

    /// A `<%` in the body has no matching `%>`. `offset` is the byte
    /// position of the opening delimiter within the body.
    #[error("Unterminated code block starting at body offset {offset}")]
    UnterminatedCodeBlock { offset: usize },

    /// An interpolation directive (`<%= %>`, `<%=i %>`, `<%=raw %>`) has
    /// nothing to interpolate.
    #[error("Empty expression in directive \"<%{directive}%>\"")]
    EmptyExpression { directive: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoFailure(#[from] io::Error),

    /// Wraps a failure with the template file it came from.
    #[error("Unable to parse file {path}: {source}")]
    TemplateFile {
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// A template could not be rendered by the preview renderer.
    #[error("Preview error: {0}")]
    Preview(String),

    /// The preview context file is not valid JSON.
    #[error("Context error: {0}")]
    Context(#[from] serde_json::Error),

    /// An interpolated expression failed to compile or evaluate.
    #[error("Expression error: {0}")]
    Expression(#[from] minijinja::Error),

    /// The `--include` pattern is not a valid glob.
    #[error("Pattern error: {0}")]
    Pattern(#[from] globset::Error),

    /// Directory traversal failed.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// Attaches the template path to a parse failure.
    pub fn in_file<S: Into<String>>(self, path: S) -> Self {
        Error::TemplateFile { path: path.into(), source: Box::new(self) }
    }
}

/// Convenience type alias for Results with gel's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
