//! Common constants used throughout gel.

/// Line separating the header block from the body, including the newlines
/// that must surround it.
pub const DIVIDER: &[u8] = b"\n---\n";

/// Opens a directive in the body.
pub const OPEN_DELIMITER: &[u8] = b"<%";

/// Closes a directive in the body.
pub const CLOSE_DELIMITER: &[u8] = b"%>";

/// Directive prefix for integer interpolation (`<%=i expr %>`).
pub const INTEGER_PREFIX: &[u8] = b"=i";

/// Directive prefix for interpolation that is never escaped (`<%=raw expr %>`).
pub const RAW_PREFIX: &[u8] = b"=raw";

/// Directive prefix for value interpolation (`<%= expr %>`).
pub const VALUE_PREFIX: &[u8] = b"=";

/// Header option names.
pub const FUNC_OPTION: &str = "func";
pub const PARAMETERS_OPTION: &str = "parameters";
pub const ESCAPE_OPTION: &str = "escape";
pub const IMPORTS_OPTION: &str = "imports";

/// Mandatory first parameter of every generated function.
pub const WRITER_PARAMETER: &str = "writer io.Writer";

/// Go packages pulled in by generated code.
pub const IO_IMPORT: &str = "io";
pub const STRCONV_IMPORT: &str = "strconv";
pub const HTML_IMPORT: &str = "html";

/// Package used when none is given on the command line.
pub const DEFAULT_PACKAGE: &str = "main";

/// Glob selecting template files when a directory is given.
pub const DEFAULT_INCLUDE: &str = "*.gel";

/// Name used in diagnostics for a template read from standard input.
pub const STDIN_LABEL: &str = "<stdin>";
