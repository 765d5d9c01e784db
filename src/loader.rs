//! Template input loading.
//! Resolves command-line arguments into template sources and reads their
//! bytes: single files, directories walked for matching files, or
//! standard input.
use crate::constants::STDIN_LABEL;
use crate::error::{Error, Result};
use globset::{Glob, GlobMatcher};
use log::debug;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Represents where template bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A single template file
    File(PathBuf),
    /// A directory searched recursively for templates
    Directory(PathBuf),
    /// One template read from standard input
    Stdin,
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::File(path) => write!(f, "file: '{}'", path.display()),
            TemplateSource::Directory(path) => write!(f, "directory: '{}'", path.display()),
            TemplateSource::Stdin => write!(f, "standard input"),
        }
    }
}

impl TemplateSource {
    /// Classifies a command-line path.
    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        if path.is_dir() {
            Self::Directory(path)
        } else {
            Self::File(path)
        }
    }
}

/// Raw bytes of one template plus the name used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInput {
    pub label: String,
    pub source: Vec<u8>,
}

impl TemplateInput {
    fn read_file(path: &Path) -> Result<Self> {
        let label = path.display().to_string();
        debug!("Reading template {}", label);
        match fs::read(path) {
            Ok(source) => Ok(Self { label, source }),
            Err(e) => Err(Error::IoFailure(e).in_file(label)),
        }
    }
}

/// Compiles the `--include` glob used to select files inside directories.
pub fn include_matcher(pattern: &str) -> Result<GlobMatcher> {
    Ok(Glob::new(pattern)?.compile_matcher())
}

/// Reads every template named by `paths`, in argument order.
///
/// Directories contribute their matching files sorted by path. With no
/// paths, one template is read from standard input.
pub fn load_inputs(paths: &[PathBuf], include: &GlobMatcher) -> Result<Vec<TemplateInput>> {
    let sources: Vec<TemplateSource> = if paths.is_empty() {
        vec![TemplateSource::Stdin]
    } else {
        paths.iter().cloned().map(TemplateSource::from_path).collect()
    };

    let mut inputs = Vec::new();
    for source in sources {
        debug!("Loading templates from {}", source);
        match source {
            TemplateSource::File(path) => inputs.push(TemplateInput::read_file(&path)?),
            TemplateSource::Directory(dir) => {
                for path in find_templates(&dir, include)? {
                    inputs.push(TemplateInput::read_file(&path)?);
                }
            }
            TemplateSource::Stdin => inputs.push(read_stdin(std::io::stdin())?),
        }
    }
    Ok(inputs)
}

/// Lists files under `dir` whose path relative to `dir` matches `include`.
pub fn find_templates(dir: &Path, include: &GlobMatcher) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        if include.is_match(relative) {
            found.push(entry.path().to_path_buf());
        } else {
            debug!("Skipping {}", entry.path().display());
        }
    }
    Ok(found)
}

/// Reads a whole template from `reader`, labelled as standard input.
pub fn read_stdin<R: Read>(mut reader: R) -> Result<TemplateInput> {
    let mut source = Vec::new();
    reader
        .read_to_end(&mut source)
        .map_err(|e| Error::IoFailure(e).in_file(STDIN_LABEL))?;
    Ok(TemplateInput { label: STDIN_LABEL.to_string(), source })
}
