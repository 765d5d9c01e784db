//! Go source emission.
//!
//! A generated file holds one package clause, one import block with the
//! union of every template's imports, and one function per template:
//!
//! ```text
//! func Page(writer io.Writer, title string) (err error) {
//!     io.WriteString(writer, `<h1>`)
//!     io.WriteString(writer, html.EscapeString(title))
//!     io.WriteString(writer, `</h1>`)
//!     return
//! }
//! ```

use crate::error::Result;
use crate::header::EscapeMode;
use crate::imports::ImportSet;
use crate::segment::Segment;
use crate::template::CompiledTemplate;
use log::debug;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Renders a whole Go file for `templates` into memory.
pub fn generate(package: &str, templates: &[CompiledTemplate]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_program(&mut out, package, templates)?;
    Ok(out)
}

/// Writes the package clause, the merged import block and every function.
pub fn write_program<W: Write>(
    w: &mut W,
    package: &str,
    templates: &[CompiledTemplate],
) -> io::Result<()> {
    writeln!(w, "package {}", package)?;
    writeln!(w)?;

    let imports: ImportSet = templates.iter().map(|t| &t.imports).collect();
    write_imports(w, &imports)?;

    for template in templates {
        writeln!(w)?;
        write_function(w, template)?;
    }
    Ok(())
}

pub fn write_imports<W: Write>(w: &mut W, imports: &ImportSet) -> io::Result<()> {
    writeln!(w, "import (")?;
    for package in imports.iter() {
        writeln!(w, "\t\"{}\"", package)?;
    }
    writeln!(w, ")")
}

pub fn write_function<W: Write>(w: &mut W, template: &CompiledTemplate) -> io::Result<()> {
    debug!("Emitting func {}", template.func_name);
    writeln!(w, "func {}({}) (err error) {{", template.func_name, template.parameters)?;
    for segment in &template.segments {
        emit_segment(w, segment)?;
    }
    writeln!(w, "\treturn")?;
    writeln!(w, "}}")
}

/// Writes the Go statement equivalent to one segment.
pub fn emit_segment<W: Write>(w: &mut W, segment: &Segment) -> io::Result<()> {
    match segment {
        Segment::Literal(text) => {
            writeln!(w, "\tio.WriteString(writer, {})", go_string_literal(text))
        }
        Segment::Code(code) => {
            w.write_all(code)?;
            writeln!(w)
        }
        Segment::IntegerInterpolation(expression) => {
            write!(w, "\tio.WriteString(writer, strconv.FormatInt(int64(")?;
            w.write_all(expression)?;
            writeln!(w, "), 10))")
        }
        Segment::ValueInterpolation { expression, escape: EscapeMode::None } => {
            write!(w, "\tio.WriteString(writer, ")?;
            w.write_all(expression)?;
            writeln!(w, ")")
        }
        Segment::ValueInterpolation { expression, escape: EscapeMode::Html } => {
            write!(w, "\tio.WriteString(writer, html.EscapeString(")?;
            w.write_all(expression)?;
            writeln!(w, "))")
        }
    }
}

/// Builds a Go string expression whose value is exactly `bytes`.
///
/// Text goes into raw (backquoted) strings. Characters a raw string cannot
/// hold (backquote, carriage return, NUL, byte order mark) and invalid
/// UTF-8 bytes go into interpreted strings, and the pieces are joined with
/// `+`.
pub fn go_string_literal(bytes: &[u8]) -> String {
    let mut pieces: Vec<String> = Vec::new();
    let mut raw = String::new();
    let mut quoted = String::new();

    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            match interpreted_escape(c) {
                Some(escaped) => {
                    flush(&mut raw, &mut pieces, '`');
                    quoted.push_str(escaped);
                }
                None => {
                    flush(&mut quoted, &mut pieces, '"');
                    raw.push(c);
                }
            }
        }
        if !chunk.invalid().is_empty() {
            flush(&mut raw, &mut pieces, '`');
            for b in chunk.invalid() {
                let _ = write!(quoted, "\\x{:02x}", b);
            }
        }
    }
    flush(&mut raw, &mut pieces, '`');
    flush(&mut quoted, &mut pieces, '"');

    if pieces.is_empty() {
        return "``".to_string();
    }
    pieces.join(" + ")
}

fn interpreted_escape(c: char) -> Option<&'static str> {
    match c {
        '`' => Some("`"),
        '\r' => Some("\\r"),
        '\0' => Some("\\x00"),
        '\u{feff}' => Some("\\ufeff"),
        _ => None,
    }
}

fn flush(buf: &mut String, pieces: &mut Vec<String>, quote: char) {
    if !buf.is_empty() {
        pieces.push(format!("{quote}{buf}{quote}"));
        buf.clear();
    }
}
