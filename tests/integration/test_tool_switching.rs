//! Integration tests for tool selection and mounting

#[path = "../test_utils/mod.rs"]
mod test_utils;

use devtoolbox::config::ToolsConfig;
use devtoolbox::shell::Shell;
use devtoolbox::tools::{descriptors, ActiveTool, Phase, ToolKey, Transform};
use test_utils::{sample_jwt, shell_with};

#[test]
fn test_every_registered_tool_mounts() {
    let mut shell = Shell::default();
    for descriptor in descriptors() {
        shell.select(descriptor.key);
        assert_eq!(shell.selected_key(), Some(descriptor.key));
        let tool = shell.active().unwrap();
        assert_eq!(tool.key(), descriptor.key);
        assert_eq!(tool.descriptor().tooltip, descriptor.tooltip);
        assert_eq!(shell.shortcuts().active(), Some(descriptor.key));
        assert_eq!(shell.shortcuts().len(), 1);
    }
}

#[test]
fn test_state_does_not_survive_a_switch() {
    let mut shell = shell_with(ToolKey::Jwt);
    let tool = shell.active_mut().unwrap();
    tool.set_input(sample_jwt());
    tool.run_transform();
    assert_eq!(tool.phase(), Phase::Result);

    shell.select(ToolKey::Regex);
    shell.select(ToolKey::Jwt);
    let tool = shell.active().unwrap();
    assert_eq!(tool.input(), "");
    assert_eq!(tool.phase(), Phase::Empty);
}

#[test]
fn test_errors_do_not_survive_a_switch() {
    let mut shell = shell_with(ToolKey::Json);
    let tool = shell.active_mut().unwrap();
    tool.set_input("{".to_string());
    tool.run_transform();
    assert!(tool.error().is_some());

    shell.select(ToolKey::Uuid);
    assert!(shell.active().unwrap().error().is_none());
    shell.select(ToolKey::Json);
    assert!(shell.active().unwrap().error().is_none());
}

#[test]
fn test_regex_settings_reset_on_remount() {
    let mut shell = shell_with(ToolKey::Regex);
    if let Some(ActiveTool::Regex(tool)) = shell.active_mut() {
        tool.set_pattern("a+");
        tool.set_flags("gim");
    }

    shell.select(ToolKey::Markdown);
    shell.select(ToolKey::Regex);
    let Some(ActiveTool::Regex(tool)) = shell.active() else {
        panic!("regex tester not mounted");
    };
    assert_eq!(tool.pattern(), "");
    assert_eq!(tool.flags(), "g");
}

#[test]
fn test_markdown_sample_follows_config() {
    let with_sample = Shell::new(ToolsConfig {
        default_tool: ToolKey::Markdown,
        markdown_sample: true,
    });
    assert_eq!(with_sample.active().unwrap().phase(), Phase::Result);
    assert!(!with_sample.active().unwrap().input().is_empty());

    let blank = shell_with(ToolKey::Markdown);
    assert_eq!(blank.active().unwrap().input(), "");
}

#[test]
fn test_unknown_selection_shows_nothing() {
    let mut shell = Shell::default();
    shell.select_id("color-picker");
    assert_eq!(shell.selected_id(), "color-picker");
    assert_eq!(shell.selected_key(), None);
    assert!(shell.active().is_none());
    assert!(shell.shortcuts().is_empty());

    shell.select(ToolKey::Base64);
    assert_eq!(shell.active().map(|t| t.key()), Some(ToolKey::Base64));
}
