//! Body scanner: splits a template body into segments.
//!
//! A single forward pass looks for `<%`. Text before it becomes a literal
//! segment; the bytes up to the next `%>` form a directive that is
//! classified by its prefix:
//!
//! | directive        | segment                                   |
//! |------------------|-------------------------------------------|
//! | `<%=i expr %>`   | integer interpolation                     |
//! | `<%=raw expr %>` | value interpolation, never escaped        |
//! | `<%= expr %>`    | value interpolation, template escape mode |
//! | `<% code %>`     | embedded code                             |
//!
//! The `i` and `raw` markers only count when followed by whitespace, so
//! `<%=item%>` interpolates a variable named `item`.

use crate::constants::{CLOSE_DELIMITER, INTEGER_PREFIX, OPEN_DELIMITER, RAW_PREFIX, VALUE_PREFIX};
use crate::error::{Error, Result};
use crate::header::EscapeMode;
use crate::segment::Segment;
use log::trace;

/// Scans `body` into segments, in source order.
///
/// # Errors
/// * `Error::UnterminatedCodeBlock` if a `<%` has no matching `%>`
/// * `Error::EmptyExpression` if an interpolation directive is empty
pub fn scan(body: &[u8], escape: EscapeMode) -> Result<Vec<Segment>> {
    Scanner::new(body, escape).scan()
}

/// Scanner state over one template body.
pub struct Scanner<'src> {
    body: &'src [u8],
    /// Byte offset of the unscanned suffix.
    pos: usize,
    escape: EscapeMode,
}

impl<'src> Scanner<'src> {
    pub fn new(body: &'src [u8], escape: EscapeMode) -> Self {
        Self { body, pos: 0, escape }
    }

    pub fn scan(mut self) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();

        while self.pos < self.body.len() {
            let rest = &self.body[self.pos..];
            match find(rest, OPEN_DELIMITER) {
                Some(0) => {
                    let start = self.pos;
                    let inner = &rest[OPEN_DELIMITER.len()..];
                    let Some(end) = find(inner, CLOSE_DELIMITER) else {
                        return Err(Error::UnterminatedCodeBlock { offset: start });
                    };
                    segments.push(classify(&inner[..end], self.escape)?);
                    self.pos += OPEN_DELIMITER.len() + end + CLOSE_DELIMITER.len();
                }
                Some(next) => {
                    segments.push(Segment::Literal(rest[..next].to_vec()));
                    self.pos += next;
                }
                None => {
                    segments.push(Segment::Literal(rest.to_vec()));
                    self.pos = self.body.len();
                }
            }
            if let Some(segment) = segments.last() {
                trace!("scanned {} segment, now at offset {}", segment.kind(), self.pos);
            }
        }

        Ok(segments)
    }
}

/// Classifies the bytes between `<%` and `%>`.
///
/// # Errors
/// * `Error::EmptyExpression` if an interpolation has no expression
pub fn classify(directive: &[u8], escape: EscapeMode) -> Result<Segment> {
    let segment = if let Some(expression) = marker_expression(directive, INTEGER_PREFIX) {
        Segment::IntegerInterpolation(non_empty(expression, directive)?)
    } else if let Some(expression) = marker_expression(directive, RAW_PREFIX) {
        Segment::ValueInterpolation {
            expression: non_empty(expression, directive)?,
            escape: EscapeMode::None,
        }
    } else if let Some(expression) = directive.strip_prefix(VALUE_PREFIX) {
        Segment::ValueInterpolation {
            expression: non_empty(expression.trim_ascii().to_vec(), directive)?,
            escape,
        }
    } else {
        Segment::Code(directive.to_vec())
    };
    Ok(segment)
}

fn non_empty(expression: Vec<u8>, directive: &[u8]) -> Result<Vec<u8>> {
    if expression.is_empty() {
        return Err(Error::EmptyExpression {
            directive: String::from_utf8_lossy(directive).into_owned(),
        });
    }
    Ok(expression)
}

/// Returns the trimmed expression after `marker` when the marker is
/// followed by whitespace.
fn marker_expression(directive: &[u8], marker: &[u8]) -> Option<Vec<u8>> {
    let rest = directive.strip_prefix(marker)?;
    match rest.first() {
        Some(b) if b.is_ascii_whitespace() => Some(rest.trim_ascii().to_vec()),
        _ => None,
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}
