//! Tool definitions
//!
//! A tool pairs a display label and a selection key with a transformation rule.

use serde::{Deserialize, Serialize};

use crate::transform::Transform;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Text shown in the UI (e.g., "snake_case")
    pub label: String,
    /// Unique selection key (e.g., "snakeCase")
    pub key: String,
    /// Rule applied when this tool is selected
    pub rule: Transform,
}

impl Tool {
    /// Create a tool whose key is the rule's own key
    pub fn new(label: impl Into<String>, rule: Transform) -> Self {
        Self {
            label: label.into(),
            key: rule.key().to_string(),
            rule,
        }
    }

    /// Override the selection key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Apply the tool's rule
    pub fn apply(&self, input: &str) -> String {
        self.rule.apply(input)
    }
}
