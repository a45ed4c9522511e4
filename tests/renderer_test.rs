use indexmap::IndexMap;
use stencil::error::Error;
use stencil::renderer::{TemplateRenderer, TokenRenderer};

fn values(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_token_free_input_is_identity() {
    let engine = TokenRenderer::new();
    let input = "console.log('no tokens here');\n{ not: a token }";

    let result = engine.render(input, &values(&[("unused", "x")])).unwrap();
    assert_eq!(result, input);
}

#[test]
fn test_single_token_replaced_exactly_once() {
    let engine = TokenRenderer::new();

    let result = engine.render("{{x}}.js", &values(&[("x", "foo")])).unwrap();
    assert_eq!(result, "foo.js");

    let result = engine.render("a-{{x}}-b-{{x}}", &values(&[("x", "foo")])).unwrap();
    assert_eq!(result, "a-foo-b-foo");
}

#[test]
fn test_whitespace_inside_braces() {
    let engine = TokenRenderer::new();

    let result = engine.render("{{ fileName }}.js", &values(&[("fileName", "MyApp")])).unwrap();
    assert_eq!(result, "MyApp.js");
}

#[test]
fn test_multiple_distinct_tokens() {
    let engine = TokenRenderer::new();
    let context = values(&[("name", "demo"), ("ext", "json")]);

    let result = engine.render("{{name}}/package.{{ext}}", &context).unwrap();
    assert_eq!(result, "demo/package.json");
}

#[test]
fn test_unresolved_token_is_hard_error() {
    let engine = TokenRenderer::new();

    match engine.render("{{missing}}.js", &values(&[("x", "foo")])) {
        Err(Error::UnresolvedParameter { name }) => assert_eq!(name, "missing"),
        other => panic!("Expected UnresolvedParameter, got {:?}", other),
    }
}

#[test]
fn test_substitution_is_not_recursive() {
    // A substituted value containing token syntax must not be re-expanded.
    let engine = TokenRenderer::new();
    let context = values(&[("a", "{{b}}"), ("b", "never")]);

    let result = engine.render("{{a}}", &context).unwrap();
    assert_eq!(result, "{{b}}");
}

#[test]
fn test_non_identifier_braces_left_untouched() {
    let engine = TokenRenderer::new();
    let context = values(&[("x", "foo")]);

    assert_eq!(engine.render("{{1bad}}", &context).unwrap(), "{{1bad}}");
    assert_eq!(engine.render("{{}}", &context).unwrap(), "{{}}");
    assert_eq!(engine.render("{{a-b}}", &context).unwrap(), "{{a-b}}");
}
