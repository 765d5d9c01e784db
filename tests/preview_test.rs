use gel::error::Error;
use gel::preview::{load_context, preview_all, MiniJinjaRenderer, TemplateRenderer};
use gel::template::{CompiledTemplate, ParseOptions};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn compile(source: &str) -> CompiledTemplate {
    CompiledTemplate::parse(source.as_bytes(), &ParseOptions::default()).unwrap()
}

fn render(source: &str, context: serde_json::Value) -> Result<String, Error> {
    let bytes = MiniJinjaRenderer::new().render(&compile(source), &context)?;
    Ok(String::from_utf8(bytes).unwrap())
}

#[test]
fn test_integer_interpolation() {
    assert_eq!(render("func: N\n---\n<%=i 42 %>", json!({})).unwrap(), "42");
    assert_eq!(
        render("func: N\n---\n<%=i a %>, <%=i b %>", json!({"a": 1, "b": -20})).unwrap(),
        "1, -20"
    );
}

#[test]
fn test_html_escaping_follows_mode() {
    let context = json!({"tag": "<b>"});
    assert_eq!(render("func: E\nescape: html\n---\n<%= tag %>", context.clone()).unwrap(), "&lt;b&gt;");
    assert_eq!(render("func: E\n---\n<%= tag %>", context.clone()).unwrap(), "<b>");
    assert_eq!(render("func: E\nescape: html\n---\n<%=raw tag %>", context).unwrap(), "<b>");
}

#[test]
fn test_string_literal_expression() {
    assert_eq!(
        render("func: E\nescape: html\n---\n<p>Hello, <%= \"<Jack>\" %>!</p>\n", json!({})).unwrap(),
        "<p>Hello, &lt;Jack&gt;!</p>\n"
    );
}

#[test]
fn test_body_without_directives_round_trips() {
    let body = "Hello, World!\n\t`quoted` 100% <b>bold</b>\r\n";
    let source = format!("func: Static\n---\n{}", body);
    assert_eq!(render(&source, json!({})).unwrap(), body);
}

#[test]
fn test_field_access() {
    let context = json!({"user": {"name": "Jack"}});
    assert_eq!(render("func: F\n---\nHi <%= user.name %>", context).unwrap(), "Hi Jack");
}

#[test]
fn test_code_segment_cannot_be_previewed() {
    match render("func: Loop\n---\n<% for { %>x<% } %>", json!({})) {
        Err(Error::Preview(message)) => assert!(message.starts_with("Loop:")),
        other => panic!("Expected Preview error, got {:?}", other),
    }
}

#[test]
fn test_type_mismatches() {
    assert!(matches!(render("func: T\n---\n<%=i name %>", json!({"name": "x"})), Err(Error::Preview(_))));
    assert!(matches!(render("func: T\n---\n<%= n %>", json!({"n": 3})), Err(Error::Preview(_))));
}

#[test]
fn test_undefined_name_fails() {
    assert!(matches!(
        render("func: U\n---\n<%= missing %>", json!({})),
        Err(Error::Preview(_)) | Err(Error::Expression(_))
    ));
    assert!(matches!(render("func: U\n---\n<%= 1 + %>", json!({})), Err(Error::Expression(_))));
}

#[test]
fn test_preview_all_concatenates_in_order() {
    let templates = [compile("func: A\n---\nfirst "), compile("func: B\n---\nsecond")];
    let out = preview_all(&MiniJinjaRenderer::new(), &templates, &json!({})).unwrap();
    assert_eq!(out, b"first second".to_vec());
}

#[test]
fn test_load_context() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"name": "Jack"}}"#).unwrap();
    assert_eq!(load_context(file.path()).unwrap(), json!({"name": "Jack"}));

    let mut bad = NamedTempFile::new().unwrap();
    write!(bad, "{{not json").unwrap();
    assert!(matches!(load_context(bad.path()), Err(Error::Context(_))));
}
