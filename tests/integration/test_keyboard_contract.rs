//! Integration tests for the shared keyboard contract

#[path = "../test_utils/mod.rs"]
mod test_utils;

use devtoolbox::shortcuts::{resolve, ShortcutAction, ShortcutRegistry};
use devtoolbox::tools::{ActiveTool, OutputRegion, Phase, ToolKey, Transform};
use eframe::egui::{Key, Modifiers};
use test_utils::{sample_jwt, shell_with, MemoryClipboard};

#[test]
fn test_chords() {
    let cmd = Modifiers::COMMAND;
    assert_eq!(resolve(Key::Enter, cmd, None), Some(ShortcutAction::Run));
    assert_eq!(resolve(Key::L, cmd, None), Some(ShortcutAction::ClearAll));
    assert_eq!(resolve(Key::C, cmd, None), None);
    assert_eq!(
        resolve(Key::C, cmd, Some(OutputRegion::Payload)),
        Some(ShortcutAction::Copy(OutputRegion::Payload))
    );
    assert_eq!(resolve(Key::Enter, Modifiers::NONE, None), None);
    assert_eq!(resolve(Key::Enter, cmd | Modifiers::SHIFT, None), None);
    assert_eq!(resolve(Key::K, cmd, None), None);
}

#[test]
fn test_run_then_clear_on_every_tool() {
    let inputs = [
        (ToolKey::Json, r#"{"x":[1,2]}"#.to_string()),
        (ToolKey::Jwt, sample_jwt()),
        (ToolKey::Regex, "abc".to_string()),
        (ToolKey::Uuid, String::new()),
        (ToolKey::Base64, "hello".to_string()),
        (ToolKey::Markdown, "# hi".to_string()),
    ];
    let mut clipboard = MemoryClipboard::new();

    for (key, input) in inputs {
        let mut shell = shell_with(key);
        shell.active_mut().unwrap().set_input(input);

        assert!(shell.handle_shortcut(ShortcutAction::Run, &mut clipboard));
        assert_eq!(shell.active().unwrap().phase(), Phase::Result, "{key}");

        assert!(shell.handle_shortcut(ShortcutAction::ClearAll, &mut clipboard));
        let tool = shell.active().unwrap();
        assert_eq!(tool.phase(), Phase::Empty, "{key}");
        assert_eq!(tool.input(), "", "{key}");
    }
}

#[test]
fn test_copy_region_goes_to_clipboard() {
    let mut shell = shell_with(ToolKey::Jwt);
    shell.active_mut().unwrap().set_input(sample_jwt());
    let mut clipboard = MemoryClipboard::new();
    shell.handle_shortcut(ShortcutAction::Run, &mut clipboard);

    assert!(shell.handle_shortcut(ShortcutAction::Copy(OutputRegion::Payload), &mut clipboard));
    assert!(clipboard.contents().unwrap().contains("\"name\": \"John Doe\""));

    assert!(shell.handle_shortcut(ShortcutAction::Copy(OutputRegion::Header), &mut clipboard));
    assert!(clipboard.contents().unwrap().contains("\"alg\": \"HS256\""));
    assert_eq!(clipboard.write_count(), 2);
}

#[test]
fn test_copy_from_markdown_preview_takes_the_source() {
    let source = "# Notes\n\n- **one**\n";
    let mut shell = shell_with(ToolKey::Markdown);
    shell.active_mut().unwrap().set_input(source.to_string());
    let mut clipboard = MemoryClipboard::new();

    let action = resolve(Key::C, Modifiers::COMMAND, Some(OutputRegion::Main));
    assert_eq!(action, Some(ShortcutAction::Copy(OutputRegion::Main)));
    assert!(shell.handle_shortcut(ShortcutAction::Copy(OutputRegion::Main), &mut clipboard));
    assert_eq!(clipboard.contents(), Some(source));
}

#[test]
fn test_copy_of_empty_output_is_a_no_op() {
    let mut shell = shell_with(ToolKey::Base64);
    let mut clipboard = MemoryClipboard::new();
    assert!(!shell.handle_shortcut(ShortcutAction::Copy(OutputRegion::Main), &mut clipboard));
    assert_eq!(clipboard.write_count(), 0);
    assert_eq!(clipboard.contents(), None);
}

#[test]
fn test_run_uses_auxiliary_settings() {
    let mut shell = shell_with(ToolKey::Regex);
    if let Some(ActiveTool::Regex(tool)) = shell.active_mut() {
        tool.set_pattern("[A-Z]");
        tool.set_flags("gi");
        tool.set_input("aBc".to_string());
    }
    let mut clipboard = MemoryClipboard::new();
    shell.handle_shortcut(ShortcutAction::Run, &mut clipboard);
    shell.handle_shortcut(ShortcutAction::Copy(OutputRegion::Main), &mut clipboard);
    assert_eq!(clipboard.contents(), Some("a\nB\nc"));
}

#[test]
fn test_subscriptions_are_scoped() {
    let registry = ShortcutRegistry::new();
    let first = registry.subscribe(ToolKey::Json);
    assert!(registry.is_active(&first));

    let second = registry.subscribe(ToolKey::Jwt);
    assert!(!registry.is_active(&first));
    assert!(registry.is_active(&second));
    assert_eq!(registry.active(), Some(ToolKey::Jwt));

    drop(second);
    assert!(registry.is_active(&first));
    assert_eq!(registry.len(), 1);

    drop(first);
    assert!(registry.is_empty());
    assert_eq!(registry.active(), None);
}

#[test]
fn test_subscription_outliving_registry() {
    let registry = ShortcutRegistry::new();
    let subscription = registry.subscribe(ToolKey::Uuid);
    drop(registry);
    assert_eq!(subscription.tool(), ToolKey::Uuid);
    drop(subscription);
}
