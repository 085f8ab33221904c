//! Input and Keyboard Handling
//!
//! Routes the shared keyboard contract to the mounted tool and feeds files
//! dropped on the window to the Base64 converter.
//!
//! | Shortcut | Action | Works When Focused |
//! |----------|--------|-------------------|
//! | Ctrl/Cmd+Enter | Run transform | Always |
//! | Ctrl/Cmd+C | Copy output region | Output region focused |
//! | Ctrl/Cmd+L | Clear tool | Always |

use devtoolbox::shortcuts::{self, ShortcutAction};
use devtoolbox::tools::ActiveTool;
use eframe::egui;
use tracing::debug;

use super::DevToolboxApp;

impl DevToolboxApp {
    /// Handle keyboard shortcuts
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let focused = self.focused_output;
        let mut actions: Vec<ShortcutAction> = Vec::new();

        ctx.input_mut(|i| {
            i.events.retain(|event| {
                let action = match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => shortcuts::resolve(*key, *modifiers, focused),
                    // The platform layer turns Ctrl/Cmd+C into a Copy event
                    egui::Event::Copy => {
                        shortcuts::resolve(egui::Key::C, egui::Modifiers::COMMAND, focused)
                    }
                    _ => None,
                };

                match action {
                    Some(action) => {
                        actions.push(action);
                        false
                    }
                    None => true,
                }
            });
        });

        for action in actions {
            if !self.shell.handle_shortcut(action, &mut self.clipboard) {
                debug!("Shortcut {:?} not handled", action);
            }
            if action == ShortcutAction::ClearAll {
                self.images.clear();
            }
        }
    }

    /// Load the first dropped file into the Base64 converter, if it is active
    pub(super) fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.first() else {
            return;
        };

        let Some(ActiveTool::Base64(tool)) = self.shell.active_mut() else {
            debug!("Ignoring dropped file {:?}: Base64 tool not active", file.name);
            return;
        };

        if let Some(bytes) = &file.bytes {
            tool.load_bytes(bytes);
        } else if let Some(path) = &file.path {
            // Read failures are shown as the tool's error
            let _ = tool.load_file(path);
        }
        self.images.clear();
    }
}
