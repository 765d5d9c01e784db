//! Direct rendering of compiled templates, without a Go toolchain.
//! Interpolated expressions are evaluated with MiniJinja against a JSON
//! context, which covers the literal, identifier and field-access forms
//! templates commonly interpolate.

use crate::error::{Error, Result};
use crate::header::EscapeMode;
use crate::segment::Segment;
use crate::template::CompiledTemplate;
use log::trace;
use minijinja::{Environment, UndefinedBehavior, Value};
use std::path::Path;

/// Trait for template preview engines.
pub trait TemplateRenderer {
    /// Renders a compiled template with the given context.
    ///
    /// # Arguments
    /// * `template` - Compiled template to render
    /// * `context` - Values available to interpolated expressions
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - The bytes the generated function would write
    fn render(&self, template: &CompiledTemplate, context: &serde_json::Value) -> Result<Vec<u8>>;
}

/// MiniJinja-based preview engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer whose expressions fail on undefined names.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }

    fn eval(&self, expression: &[u8], context: &serde_json::Value) -> Result<Value> {
        let source = String::from_utf8_lossy(expression);
        trace!("Evaluating expression '{}'", source);
        let compiled = self.env.compile_expression(&source)?;
        let value = compiled.eval(context)?;
        if value.is_undefined() {
            return Err(Error::Preview(format!("'{}' is undefined", source)));
        }
        Ok(value)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::Preview` for embedded code segments, non-integer values in
    ///   integer interpolations and non-string values in value
    ///   interpolations
    /// * `Error::Expression` if an expression fails to compile or evaluate
    fn render(&self, template: &CompiledTemplate, context: &serde_json::Value) -> Result<Vec<u8>> {
        let mut out = Vec::new();

        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => out.extend_from_slice(text),
                Segment::Code(_) => {
                    return Err(Error::Preview(format!(
                        "{}: embedded code cannot be previewed",
                        template.func_name
                    )))
                }
                Segment::IntegerInterpolation(expression) => {
                    let value = self.eval(expression, context)?;
                    let number = i64::try_from(value).map_err(|_| {
                        Error::Preview(format!(
                            "{}: '{}' is not an integer",
                            template.func_name,
                            String::from_utf8_lossy(expression)
                        ))
                    })?;
                    out.extend_from_slice(number.to_string().as_bytes());
                }
                Segment::ValueInterpolation { expression, escape } => {
                    let value = self.eval(expression, context)?;
                    let text = value.as_str().ok_or_else(|| {
                        Error::Preview(format!(
                            "{}: '{}' is not a string",
                            template.func_name,
                            String::from_utf8_lossy(expression)
                        ))
                    })?;
                    match escape {
                        EscapeMode::None => out.extend_from_slice(text.as_bytes()),
                        EscapeMode::Html => out.extend_from_slice(escape_html(text).as_bytes()),
                    }
                }
            }
        }

        Ok(out)
    }
}

/// Escapes the five characters Go's `html.EscapeString` escapes, with the
/// same entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Loads a preview context from a JSON file.
pub fn load_context<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Renders every template in order and concatenates the output.
pub fn preview_all(
    renderer: &dyn TemplateRenderer,
    templates: &[CompiledTemplate],
    context: &serde_json::Value,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for template in templates {
        out.extend(renderer.render(template, context)?);
    }
    Ok(out)
}
