//! Tool shell
//!
//! Owns the selected tool id and the mounted tool. Selecting a different id
//! drops the mounted tool together with its shortcut subscription and mounts
//! a fresh one, so no state ever carries over between tools.

use crate::clipboard::ClipboardSink;
use crate::config::ToolsConfig;
use crate::shortcuts::{ShortcutAction, ShortcutRegistry, ShortcutSubscription};
use crate::tools::{ActiveTool, ToolKey, Transform};

#[derive(Debug)]
struct MountedTool {
    tool: ActiveTool,
    subscription: ShortcutSubscription,
}

/// The single-window shell: one selected id, at most one mounted tool
#[derive(Debug)]
pub struct Shell {
    selected: String,
    mounted: Option<MountedTool>,
    shortcuts: ShortcutRegistry,
    tools_config: ToolsConfig,
}

impl Shell {
    /// Create the shell with `config.default_tool` mounted
    pub fn new(config: ToolsConfig) -> Self {
        let mut shell = Self {
            selected: String::new(),
            mounted: None,
            shortcuts: ShortcutRegistry::new(),
            tools_config: config,
        };
        shell.mount(shell.tools_config.default_tool);
        shell
    }

    /// Raw id of the current selection
    pub fn selected_id(&self) -> &str {
        &self.selected
    }

    /// Key of the current selection, `None` when the id is not registered
    pub fn selected_key(&self) -> Option<ToolKey> {
        self.selected.parse().ok()
    }

    /// Select a registered tool
    pub fn select(&mut self, key: ToolKey) {
        self.select_id(key.id());
    }

    /// Select by raw id. Unknown ids leave nothing mounted.
    pub fn select_id(&mut self, id: &str) {
        if self.selected == id {
            return;
        }

        self.unmount();
        match id.parse::<ToolKey>() {
            Ok(key) if key.id() == id => self.mount(key),
            _ => {
                debug!("No tool registered for id {:?}", id);
                self.selected = id.to_string();
            }
        }
    }

    fn mount(&mut self, key: ToolKey) {
        let tool = ActiveTool::mount(key, &self.tools_config);
        let subscription = self.shortcuts.subscribe(key);
        info!("Mounted tool {}", key);
        self.selected = key.id().to_string();
        self.mounted = Some(MountedTool { tool, subscription });
    }

    fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            info!("Unmounted tool {}", mounted.tool.key());
        }
    }

    pub fn active(&self) -> Option<&ActiveTool> {
        self.mounted.as_ref().map(|m| &m.tool)
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveTool> {
        self.mounted.as_mut().map(|m| &mut m.tool)
    }

    pub fn shortcuts(&self) -> &ShortcutRegistry {
        &self.shortcuts
    }

    /// Deliver a shortcut action to the subscribed tool.
    ///
    /// Returns whether the action was handled.
    pub fn handle_shortcut(
        &mut self,
        action: ShortcutAction,
        clipboard: &mut dyn ClipboardSink,
    ) -> bool {
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };
        if !self.shortcuts.is_active(&mounted.subscription) {
            return false;
        }

        debug!("Shortcut {:?} for {}", action, mounted.subscription.tool());
        match action {
            ShortcutAction::Run => {
                mounted.tool.run_transform();
                true
            }
            ShortcutAction::Copy(region) => mounted.tool.copy_output(region, clipboard),
            ShortcutAction::ClearAll => {
                mounted.tool.clear_all();
                true
            }
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ToolsConfig::default())
    }
}
