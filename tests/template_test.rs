use gel::error::Error;
use gel::header::EscapeMode;
use gel::segment::Segment;
use gel::template::{CompiledTemplate, ParseOptions};

fn parse(source: &str) -> Result<CompiledTemplate, Error> {
    CompiledTemplate::parse(source.as_bytes(), &ParseOptions::default())
}

#[test_log::test]
fn test_parse_hello_world() {
    let template = parse("func: HelloWorld\n---\nHello, World!\n").unwrap();

    assert_eq!(template.func_name, "HelloWorld");
    assert_eq!(template.parameters, "writer io.Writer");
    assert_eq!(template.escape, EscapeMode::None);
    assert_eq!(template.segments, vec![Segment::Literal(b"Hello, World!\n".to_vec())]);
    assert_eq!(template.imports.iter().collect::<Vec<_>>(), vec!["io"]);
}

#[test]
fn test_body_divider_is_not_split_again() {
    let template = parse("func: Doc\n---\nintro\n---\noutro\n").unwrap();
    assert_eq!(template.segments, vec![Segment::Literal(b"intro\n---\noutro\n".to_vec())]);
}

#[test]
fn test_missing_divider() {
    assert!(matches!(parse("func: Doc\nHello"), Err(Error::MissingDivider)));
}

#[test]
fn test_missing_func_regardless_of_other_options() {
    for source in [
        "escape: html\n---\nbody",
        "parameters: name string\nimports: fmt\n---\n<%= name %>",
        "func:\n---\nbody",
        "func:   \n---\nbody",
    ] {
        match parse(source) {
            Err(Error::MissingRequiredOption { option }) => assert_eq!(option, "func"),
            other => panic!("Expected MissingRequiredOption for {:?}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_malformed_header_line_reports_index() {
    match parse("func: Doc\nescape html\n---\nbody") {
        Err(Error::MalformedHeaderLine { line }) => assert_eq!(line, 1),
        other => panic!("Expected MalformedHeaderLine, got {:?}", other),
    }
}

#[test]
fn test_unknown_escape_mode_is_rejected_eagerly() {
    assert!(matches!(
        parse("func: Doc\nescape: xml\n---\n<%= name %>"),
        Err(Error::UnknownEscapeMode { mode }) if mode == "xml"
    ));
    assert!(matches!(
        parse("func: Doc\nescape: xml\n---\nno directives here"),
        Err(Error::UnknownEscapeMode { .. })
    ));
}

#[test]
fn test_unterminated_code_block() {
    assert!(matches!(
        parse("func: Doc\n---\nHello <% for {\n"),
        Err(Error::UnterminatedCodeBlock { offset: 6 })
    ));
}

#[test]
fn test_parameters_follow_writer() {
    let template = parse("func: Greet\nparameters: name string, times int\n---\nhi").unwrap();
    assert_eq!(template.parameters, "writer io.Writer, name string, times int");
}

#[test]
fn test_imports_are_lazy() {
    let template = parse("func: A\nescape: html\n---\nno values").unwrap();
    assert!(!template.imports.contains("html"));
    assert!(!template.imports.contains("strconv"));

    let template = parse("func: A\nescape: html\n---\n<%= name %> <%=i n %>").unwrap();
    assert!(template.imports.contains("html"));
    assert!(template.imports.contains("strconv"));

    let template = parse("func: A\n---\n<%= name %>").unwrap();
    assert!(!template.imports.contains("html"));

    let template = parse("func: A\nescape: html\n---\n<%=raw name %>").unwrap();
    assert!(!template.imports.contains("html"));
}

#[test]
fn test_header_imports_are_added() {
    let template = parse("func: A\nimports: fmt  strings \n---\n").unwrap();
    assert_eq!(template.imports.iter().collect::<Vec<_>>(), vec!["fmt", "io", "strings"]);
    assert!(template.segments.is_empty());
}

#[test]
fn test_default_escape_applies_only_without_header_value() {
    let options = ParseOptions { default_escape: EscapeMode::Html };

    let template = CompiledTemplate::parse(b"func: A\n---\n<%= v %>", &options).unwrap();
    assert_eq!(template.escape, EscapeMode::Html);

    let template = CompiledTemplate::parse(b"func: A\nescape:\n---\n<%= v %>", &options).unwrap();
    assert_eq!(template.escape, EscapeMode::None);
}
