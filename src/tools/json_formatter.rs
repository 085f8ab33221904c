//! JSON formatter
//!
//! Parses the input with `serde_json` and re-serializes it with two-space
//! indentation. Object keys keep their input order (`preserve_order`).

use super::{OutputRegion, Phase, ToolDescriptor, ToolKey, ToolSession, Transform};
use crate::error::ToolError;

/// A named JSON snippet that can be inserted as input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonTemplate {
    pub name: &'static str,
    pub value: &'static str,
}

/// Built-in templates offered by the formatter
pub const TEMPLATES: [JsonTemplate; 3] = [
    JsonTemplate {
        name: "User Profile",
        value: r#"{
  "id": 1,
  "name": "Jane Doe",
  "email": "jane@example.com",
  "roles": ["user", "admin"]
}"#,
    },
    JsonTemplate {
        name: "Product Schema",
        value: r#"{
  "id": 101,
  "name": "Widget",
  "price": 19.99,
  "tags": ["gadget", "tool"]
}"#,
    },
    JsonTemplate {
        name: "Empty Object",
        value: "{\n\n}",
    },
];

/// Pretty-print `input` with two-space indentation
pub fn format_json(input: &str) -> Result<String, ToolError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| ToolError::InvalidJson(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

#[derive(Debug, Default)]
pub struct JsonFormatter {
    session: ToolSession<String>,
    template: Option<usize>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &ToolSession<String> {
        &self.session
    }

    /// Mutable input buffer, for text widgets
    pub fn input_mut(&mut self) -> &mut String {
        self.session.input_mut()
    }

    pub fn output(&self) -> Option<&str> {
        self.session.output().map(String::as_str)
    }

    /// Index into [`TEMPLATES`] of the last inserted template
    pub fn selected_template(&self) -> Option<usize> {
        self.template
    }

    /// Replace the input with template `index` and clear the last result.
    ///
    /// Out-of-range indices are ignored.
    pub fn insert_template(&mut self, index: usize) {
        let Some(template) = TEMPLATES.get(index) else {
            return;
        };
        debug!("Inserting JSON template '{}'", template.name);
        self.template = Some(index);
        self.session.set_input(template.value);
        self.session.clear_state();
    }
}

impl Transform for JsonFormatter {
    fn descriptor(&self) -> &'static ToolDescriptor {
        ToolKey::Json.descriptor()
    }

    fn input(&self) -> &str {
        self.session.input()
    }

    fn set_input(&mut self, text: String) {
        self.session.set_input(text);
    }

    fn run_transform(&mut self) {
        let outcome = format_json(self.session.input());
        if let Err(e) = &outcome {
            debug!("JSON format failed: {}", e);
        }
        self.session.apply(outcome);
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn error(&self) -> Option<&str> {
        self.session.error()
    }

    fn copy_text(&self, region: OutputRegion) -> Option<String> {
        match region {
            OutputRegion::Main => self.output().map(str::to_string),
            _ => None,
        }
    }

    fn clear_all(&mut self) {
        self.session.reset();
        self.template = None;
    }
}
