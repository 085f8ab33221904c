//! Keyboard Shortcuts
//!
//! Every tool answers to the same three chords:
//!
//! | Shortcut | Action | Works When |
//! |----------|--------|------------|
//! | Ctrl/Cmd+Enter | Run the tool's transform | Always |
//! | Ctrl/Cmd+C | Copy the focused output region | An output region has focus |
//! | Ctrl/Cmd+L | Clear input, output and settings | Always |
//!
//! Listeners are scoped. The mounted tool holds a [`ShortcutSubscription`];
//! dropping it unsubscribes, so an unmounted tool can never receive an
//! action that was meant for its replacement.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use eframe::egui::{Key, Modifiers};

use crate::tools::{OutputRegion, ToolKey};

/// Action triggered by a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Primary transform (Ctrl/Cmd+Enter)
    Run,
    /// Copy one output region (Ctrl/Cmd+C)
    Copy(OutputRegion),
    /// Clear the tool's full state (Ctrl/Cmd+L)
    ClearAll,
}

/// Map a key press to an action.
///
/// `focused` is the output region holding keyboard focus, if any. Copy only
/// fires when one does, so Ctrl+C inside an input keeps its normal meaning.
pub fn resolve(
    key: Key,
    modifiers: Modifiers,
    focused: Option<OutputRegion>,
) -> Option<ShortcutAction> {
    if !modifiers.command || modifiers.alt || modifiers.shift {
        return None;
    }

    match key {
        Key::Enter => Some(ShortcutAction::Run),
        Key::L => Some(ShortcutAction::ClearAll),
        Key::C => focused.map(ShortcutAction::Copy),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct Subscribers {
    next_id: u64,
    stack: Vec<(u64, ToolKey)>,
}

/// Tracks which tool currently listens for shortcuts
#[derive(Debug, Clone, Default)]
pub struct ShortcutRegistry {
    inner: Rc<RefCell<Subscribers>>,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tool` as the newest listener
    pub fn subscribe(&self, tool: ToolKey) -> ShortcutSubscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.stack.push((id, tool));
        debug!("Shortcut subscription {} for {}", id, tool);

        ShortcutSubscription {
            id,
            tool,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Tool that would receive a dispatched action
    pub fn active(&self) -> Option<ToolKey> {
        self.inner.borrow().stack.last().map(|(_, tool)| *tool)
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.inner.borrow().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `subscription` is the one that receives actions
    pub fn is_active(&self, subscription: &ShortcutSubscription) -> bool {
        self.inner
            .borrow()
            .stack
            .last()
            .is_some_and(|(id, _)| *id == subscription.id)
    }
}

/// Guard for one listener; unsubscribes on drop
#[derive(Debug)]
pub struct ShortcutSubscription {
    id: u64,
    tool: ToolKey,
    registry: Weak<RefCell<Subscribers>>,
}

impl ShortcutSubscription {
    pub fn tool(&self) -> ToolKey {
        self.tool
    }
}

impl Drop for ShortcutSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().stack.retain(|(id, _)| *id != self.id);
            debug!("Shortcut subscription {} for {} dropped", self.id, self.tool);
        }
    }
}
