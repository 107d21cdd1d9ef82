//! Rendering semantics tests
//!
//! Covers the evaluation rules end to end: symbol substitution, iteration
//! with default and custom separators, context narrowing, and the silent
//! empty renderings for missing or non-sequence values. Sample files are
//! loaded through TemplateSources per the testing guidelines.

use rstest::rstest;
use serde_json::json;
use stache::stache::processor::template_sources::TemplateSources;
use stache::stache::rendering::render;
use stache::stache::template::Template;

#[test]
fn test_samples_render_to_expected_text() {
    let expected = [
        (
            "000-literal.stache",
            "Plain text stays exactly as written.\nNo markers here, just prose across two lines.\n",
        ),
        (
            "010-symbols.stache",
            "Hello Ada, welcome to Lisbon.\nYour id is 1024 and nothing else: .\n",
        ),
        (
            "020-iteration.stache",
            "Number:1,Number:2,Number:3,Number:4,Number:5\n",
        ),
        (
            "030-separators.stache",
            "alpha;beta;gamma\nalpha and beta and gamma\n",
        ),
        (
            "040-nested.stache",
            "Portugal: Lisbon,Porto\nJapan: Tokyo,Osaka\n",
        ),
        ("050-missing.stache", "Value: \nDone.\n"),
    ];

    for (sample, want) in expected {
        let rendered = TemplateSources::get_rendered(sample).unwrap();
        assert_eq!(rendered, want, "Sample {} rendering", sample);
    }
}

#[test]
fn test_literal_only_passthrough() {
    let rendered = render("just text, no markers", &json!({})).unwrap();
    assert_eq!(rendered, "just text, no markers");
}

#[test]
fn test_symbol_substitution_scalars() {
    let context = json!({
        "s": "text",
        "n": 42,
        "f": 4.25,
        "t": true,
        "nothing": null
    });

    assert_eq!(render("{{s}}", &context).unwrap(), "text");
    assert_eq!(render("{{n}}", &context).unwrap(), "42");
    assert_eq!(render("{{f}}", &context).unwrap(), "4.25");
    assert_eq!(render("{{t}}", &context).unwrap(), "true");
    assert_eq!(render("{{nothing}}", &context).unwrap(), "");
}

#[test]
fn test_missing_symbol_renders_empty() {
    let rendered = render("a{{gone}}b", &json!({})).unwrap();
    assert_eq!(rendered, "ab");
}

#[test]
fn test_symbol_lookup_on_non_object_context() {
    // Only mappings expose keys; scalars and sequences resolve nothing
    assert_eq!(render("{{name}}", &json!("scalar")).unwrap(), "");
    assert_eq!(render("{{name}}", &json!([1, 2])).unwrap(), "");
}

#[test]
fn test_default_separator_iteration() {
    let context = TemplateSources::get_context("020-iteration.stache").unwrap();
    let rendered = render("{{#numbers}}Number:{{.}}{{/numbers}}", &context).unwrap();

    insta::assert_snapshot!(rendered, @"Number:1,Number:2,Number:3,Number:4,Number:5");
}

#[rstest]
#[case::default_separator("{{#ns}}{{.}}{{/ns}}", "1,2,3")]
#[case::semicolon("{{#ns ';'}}{{.}}{{/ns}}", "1;2;3")]
#[case::empty_separator("{{#ns ''}}{{.}}{{/ns}}", "123")]
#[case::multichar("{{#ns ' -> '}}{{.}}{{/ns}}", "1 -> 2 -> 3")]
fn test_separator_interposition(#[case] template: &str, #[case] expected: &str) {
    let rendered = render(template, &json!({"ns": [1, 2, 3]})).unwrap();
    assert_eq!(rendered, expected);
}

#[rstest(separator => ["; ", " | ", " and "])]
fn test_custom_separator_spellings(separator: &str) {
    let template = format!("{{{{#xs '{}'}}}}{{{{.}}}}{{{{/xs}}}}", separator);
    let rendered = render(&template, &json!({"xs": ["a", "b", "c"]})).unwrap();

    assert_eq!(rendered, ["a", "b", "c"].join(separator));
}

#[test]
fn test_newline_separator() {
    let rendered = render("{{#xs '\n'}}{{.}}{{/xs}}", &json!({"xs": ["a", "b", "c"]})).unwrap();
    assert_eq!(rendered, "a\nb\nc");
}

#[test]
fn test_nested_iteration_narrows_context() {
    let context = json!({
        "outer": [
            { "label": "X", "inner": ["A", "B"] },
            { "label": "Y", "inner": ["C"] }
        ]
    });
    let rendered = render(
        "{{#outer}}{{label}}:{{#inner}}{{.}}{{/inner}}{{/outer}}",
        &context,
    )
    .unwrap();

    insta::assert_snapshot!(rendered, @"X:A,B,Y:C");
}

#[test]
fn test_missing_iteration_renders_empty() {
    let rendered = render("a{{#ghost}}X{{/ghost}}b", &json!({})).unwrap();
    assert_eq!(rendered, "ab");
}

#[test]
fn test_non_sequence_iteration_renders_empty() {
    assert_eq!(
        render("a{{#x}}X{{/x}}b", &json!({"x": 5})).unwrap(),
        "ab"
    );
    assert_eq!(
        render("a{{#x}}X{{/x}}b", &json!({"x": {"k": 1}})).unwrap(),
        "ab"
    );
    assert_eq!(
        render("a{{#x}}X{{/x}}b", &json!({"x": "not a sequence"})).unwrap(),
        "ab"
    );
}

#[test]
fn test_empty_sequence_renders_empty() {
    let rendered = render("a{{#x}}X{{/x}}b", &json!({"x": []})).unwrap();
    assert_eq!(rendered, "ab");
}

#[test]
fn test_dot_symbol_on_scalar_context() {
    let rendered = render("value is {{.}}", &json!("plain")).unwrap();
    assert_eq!(rendered, "value is plain");
}

#[test]
fn test_dot_symbol_on_mapping_context() {
    // Composite values fall back to their compact JSON spelling
    let rendered = render("{{.}}", &json!({"a": 1})).unwrap();
    assert_eq!(rendered, "{\"a\":1}");
}

#[test]
fn test_composite_items_render_as_compact_json() {
    let rendered = render("{{#xs}}{{.}}{{/xs}}", &json!({"xs": [[1, 2], [3]]})).unwrap();
    assert_eq!(rendered, "[1,2],[3]");
}

#[test]
fn test_compiled_template_renders_many_contexts() {
    let source = TemplateSources::get_string("020-iteration.stache").unwrap();
    let template = Template::compile(&source).unwrap();

    let first = TemplateSources::get_context("020-iteration.stache").unwrap();
    assert_eq!(
        template.render(&first),
        "Number:1,Number:2,Number:3,Number:4,Number:5\n"
    );

    let second = json!({ "numbers": [9] });
    assert_eq!(template.render(&second), "Number:9\n");
}
