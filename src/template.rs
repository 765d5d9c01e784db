//! Template compilation: splits a source file into header and body and
//! turns them into a [`CompiledTemplate`].

use crate::constants::DIVIDER;
use crate::error::{Error, Result};
use crate::header::{EscapeMode, Header, HeaderOptions};
use crate::imports::ImportSet;
use crate::scanner::scan;
use crate::segment::Segment;
use log::debug;

/// Settings shared by every template of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Escape mode for templates whose header has no `escape` key.
    pub default_escape: EscapeMode,
}

/// One parsed template, ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    pub func_name: String,
    pub parameters: String,
    pub escape: EscapeMode,
    pub imports: ImportSet,
    pub segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Parses template bytes.
    ///
    /// # Errors
    /// * `Error::MissingDivider` if no `---` line separates header and body
    /// * any header error from [`HeaderOptions::parse`] or [`Header::resolve`]
    /// * `Error::UnterminatedCodeBlock` from the body scanner
    pub fn parse(source: &[u8], options: &ParseOptions) -> Result<Self> {
        let (header, body) = split_regions(source)?;

        let header = Header::resolve(&HeaderOptions::parse(header)?, options.default_escape)?;
        debug!("Parsing body of '{}' with escape mode {}", header.func_name, header.escape);

        let segments = scan(body, header.escape)?;

        let mut imports = ImportSet::new();
        for package in &header.imports {
            imports.insert(package.as_str());
        }
        for package in segments.iter().filter_map(Segment::import) {
            imports.insert(package);
        }

        debug!("Compiled '{}' into {} segments", header.func_name, segments.len());

        Ok(Self {
            func_name: header.func_name,
            parameters: header.parameters,
            escape: header.escape,
            imports,
            segments,
        })
    }
}

/// Splits template bytes at the first divider line.
///
/// Later divider lines stay in the body.
pub fn split_regions(source: &[u8]) -> Result<(&[u8], &[u8])> {
    let at = source
        .windows(DIVIDER.len())
        .position(|window| window == DIVIDER)
        .ok_or(Error::MissingDivider)?;
    Ok((&source[..at], &source[at + DIVIDER.len()..]))
}
