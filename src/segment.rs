//! Body segments produced by the scanner.

use crate::constants::{HTML_IMPORT, STRCONV_IMPORT};
use crate::header::EscapeMode;

/// One contiguous piece of a template body.
///
/// Segments keep the exact bytes taken from the template. Interpolation
/// expressions are stored without the directive prefix and without
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any directive, written out unchanged.
    Literal(Vec<u8>),
    /// `<% ... %>`: Go statements inserted verbatim into the function body.
    Code(Vec<u8>),
    /// `<%=i expr %>`: an integer expression written in base 10.
    IntegerInterpolation(Vec<u8>),
    /// `<%= expr %>` or `<%=raw expr %>`: a string expression written raw
    /// or HTML-escaped.
    ValueInterpolation { expression: Vec<u8>, escape: EscapeMode },
}

impl Segment {
    /// The Go package the emitted statement needs beyond `io`, if any.
    pub fn import(&self) -> Option<&'static str> {
        match self {
            Segment::IntegerInterpolation(_) => Some(STRCONV_IMPORT),
            Segment::ValueInterpolation { escape: EscapeMode::Html, .. } => Some(HTML_IMPORT),
            Segment::ValueInterpolation { escape: EscapeMode::None, .. }
            | Segment::Literal(_)
            | Segment::Code(_) => None,
        }
    }

    /// Short name of the segment kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Literal(_) => "literal",
            Segment::Code(_) => "code",
            Segment::IntegerInterpolation(_) => "integer",
            Segment::ValueInterpolation { .. } => "value",
        }
    }
}
