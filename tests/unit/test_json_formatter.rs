//! Unit tests for the JSON formatter

use devtoolbox::tools::json_formatter::format_json;
use devtoolbox::tools::{JsonFormatter, OutputRegion, Phase, Transform, TEMPLATES};
use devtoolbox::MemoryClipboard;

#[test]
fn test_formats_with_two_space_indent() {
    assert_eq!(format_json(r#"{"a":1}"#).unwrap(), "{\n  \"a\": 1\n}");
}

#[test]
fn test_preserves_key_order() {
    let out = format_json(r#"{"z":1,"a":2,"m":{"y":true,"b":null}}"#).unwrap();
    let z = out.find("\"z\"").unwrap();
    let a = out.find("\"a\"").unwrap();
    let y = out.find("\"y\"").unwrap();
    let b = out.find("\"b\"").unwrap();
    assert!(z < a && y < b);
}

#[test]
fn test_scalars_and_arrays() {
    assert_eq!(format_json("  42 ").unwrap(), "42");
    assert_eq!(format_json("[1,2]").unwrap(), "[\n  1,\n  2\n]");
    assert_eq!(format_json("\"x\"").unwrap(), "\"x\"");
}

#[test]
fn test_invalid_json_sets_error_only() {
    let mut tool = JsonFormatter::new();
    tool.set_input(r#"{"a":1}"#.to_string());
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Result);

    tool.set_input("not json".to_string());
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Error);
    assert!(tool.error().unwrap().starts_with("Invalid JSON:"));
    assert!(tool.output().is_none());
}

#[test]
fn test_empty_input_is_an_error() {
    let mut tool = JsonFormatter::new();
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Error);
}

#[test]
fn test_template_overwrites_input_and_clears_state() {
    let mut tool = JsonFormatter::new();
    tool.set_input("oops".to_string());
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Error);

    tool.insert_template(1);
    assert_eq!(tool.input(), TEMPLATES[1].value);
    assert_eq!(tool.selected_template(), Some(1));
    assert_eq!(tool.phase(), Phase::Empty);

    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Result);
}

#[test]
fn test_templates_are_valid_json() {
    let names: Vec<&str> = TEMPLATES.iter().map(|t| t.name).collect();
    assert_eq!(names, ["User Profile", "Product Schema", "Empty Object"]);
    for template in TEMPLATES {
        assert!(format_json(template.value).is_ok(), "{}", template.name);
    }
}

#[test]
fn test_copy_is_noop_without_output() {
    let tool = JsonFormatter::new();
    let mut clipboard = MemoryClipboard::new();
    assert!(!tool.copy_output(OutputRegion::Main, &mut clipboard));
    assert_eq!(clipboard.write_count(), 0);
}

#[test]
fn test_clear_all_resets() {
    let mut tool = JsonFormatter::new();
    tool.insert_template(0);
    tool.run_transform();
    tool.clear_all();
    assert_eq!(tool.input(), "");
    assert_eq!(tool.phase(), Phase::Empty);
    assert_eq!(tool.selected_template(), None);
}
