//! Template header parsing.
//!
//! The header is a block of `name: value` lines above the `---` divider.
//! Every line must contain a `:`; values are stripped of surrounding space
//! characters (and nothing else).

use crate::constants::{
    ESCAPE_OPTION, FUNC_OPTION, IMPORTS_OPTION, PARAMETERS_OPTION, WRITER_PARAMETER,
};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::trace;
use std::fmt;
use std::str::FromStr;

/// How value interpolations are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EscapeMode {
    /// Values are written as-is.
    #[default]
    None,
    /// Values are passed through `html.EscapeString` first.
    Html,
}

impl FromStr for EscapeMode {
    type Err = Error;

    /// Parses the header spelling of an escape mode: `""` or `"html"`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(EscapeMode::None),
            "html" => Ok(EscapeMode::Html),
            other => Err(Error::UnknownEscapeMode { mode: other.to_string() }),
        }
    }
}

impl fmt::Display for EscapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeMode::None => write!(f, "none"),
            EscapeMode::Html => write!(f, "html"),
        }
    }
}

/// Raw `name -> value` pairs of a header block, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    options: IndexMap<String, String>,
}

impl HeaderOptions {
    /// Parses a header block line by line.
    ///
    /// # Errors
    /// * `Error::MalformedHeaderLine` with the 0-based index of the first
    ///   line lacking a `:` separator (empty lines included)
    pub fn parse(header: &[u8]) -> Result<Self> {
        let mut options = IndexMap::new();

        for (index, line) in header.split(|b| *b == b'\n').enumerate() {
            let line = String::from_utf8_lossy(line);
            let Some((name, value)) = line.split_once(':') else {
                return Err(Error::MalformedHeaderLine { line: index });
            };
            trace!("header option {:?} = {:?}", name, value);
            options.insert(name.to_string(), value.trim_matches(' ').to_string());
        }

        Ok(Self { options })
    }

    /// Returns the trimmed value of an option, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}

/// Header options resolved into the fields the compiler needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Name of the generated function.
    pub func_name: String,
    /// Full formal parameter list, starting with the writer parameter.
    pub parameters: String,
    /// Escape mode applied to `<%= %>` interpolations.
    pub escape: EscapeMode,
    /// Extra packages listed under `imports`.
    pub imports: Vec<String>,
}

impl Header {
    /// Resolves raw options into a `Header`.
    ///
    /// `default_escape` applies only when the header has no `escape` key;
    /// an explicit value, including the empty one, always wins.
    ///
    /// # Errors
    /// * `Error::MissingRequiredOption` if `func` is absent or empty
    /// * `Error::UnknownEscapeMode` if `escape` is neither `""` nor `"html"`
    pub fn resolve(options: &HeaderOptions, default_escape: EscapeMode) -> Result<Self> {
        let func_name = match options.get(FUNC_OPTION) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(Error::MissingRequiredOption {
                    option: FUNC_OPTION.to_string(),
                })
            }
        };

        let escape = match options.get(ESCAPE_OPTION) {
            Some(mode) => mode.parse()?,
            None => default_escape,
        };

        let parameters = match options.get(PARAMETERS_OPTION) {
            Some(extra) if !extra.is_empty() => format!("{}, {}", WRITER_PARAMETER, extra),
            _ => WRITER_PARAMETER.to_string(),
        };

        let imports = options
            .get(IMPORTS_OPTION)
            .map(|list| {
                list.split(' ')
                    .map(|pkg| pkg.trim_matches(' '))
                    .filter(|pkg| !pkg.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { func_name, parameters, escape, imports })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_trims_only_spaces() {
        let options = HeaderOptions::parse(b"func:  Page \t ").unwrap();
        assert_eq!(options.get("func"), Some("Page \t"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let options = HeaderOptions::parse(b"parameters: m map[string]string, t time.Time").unwrap();
        assert_eq!(options.get("parameters"), Some("m map[string]string, t time.Time"));

        let options = HeaderOptions::parse(b"func: a:b").unwrap();
        assert_eq!(options.get("func"), Some("a:b"));
    }

    #[test]
    fn test_escape_mode_from_str() {
        assert_eq!("".parse::<EscapeMode>().unwrap(), EscapeMode::None);
        assert_eq!("html".parse::<EscapeMode>().unwrap(), EscapeMode::Html);
        assert!(matches!(
            "HTML".parse::<EscapeMode>(),
            Err(Error::UnknownEscapeMode { mode }) if mode == "HTML"
        ));
    }
}
