//! Run-level compilation: parses every loaded template before anything is
//! emitted, so a failure in any file leaves no partial output behind.

use crate::cli::Args;
use crate::emitter::generate;
use crate::error::Result;
use crate::loader::{include_matcher, load_inputs, TemplateInput};
use crate::preview::{load_context, preview_all, MiniJinjaRenderer};
use crate::template::{CompiledTemplate, ParseOptions};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Parses all inputs in order, stopping at the first failure.
///
/// # Errors
/// * `Error::TemplateFile` naming the failing input and wrapping the
///   parse condition
pub fn compile_all(inputs: &[TemplateInput], options: &ParseOptions) -> Result<Vec<CompiledTemplate>> {
    let mut templates = Vec::with_capacity(inputs.len());
    for input in inputs {
        debug!("Compiling {}", input.label);
        let template = CompiledTemplate::parse(&input.source, options)
            .map_err(|e| e.in_file(input.label.as_str()))?;
        templates.push(template);
    }
    Ok(templates)
}

/// Produces the full output of a run in memory.
///
/// # Flow
/// 1. Loads template bytes from files, directories or stdin
/// 2. Parses every template; the first failure aborts the run
/// 3. Generates Go source, or renders previews when `--preview` is given
pub fn build(args: &Args) -> Result<Vec<u8>> {
    let include = include_matcher(&args.include)?;
    let inputs = load_inputs(&args.templates, &include)?;

    let options = ParseOptions { default_escape: args.escape.unwrap_or_default() };
    let templates = compile_all(&inputs, &options)?;

    match &args.preview {
        Some(context_path) => {
            let context = load_context(context_path)?;
            preview_all(&MiniJinjaRenderer::new(), &templates, &context)
        }
        None => generate(&args.package, &templates),
    }
}

/// Writes the run output to `output`, creating its parent directories, or
/// to stdout when no file is given.
pub fn write_output(content: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            debug!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Builds the output and writes it in one piece. Nothing is written when
/// building fails.
pub fn run(args: &Args) -> Result<()> {
    let output = build(args)?;
    write_output(&output, args.output.as_deref())
}
