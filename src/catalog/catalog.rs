//! Tool catalog loading from YAML configuration
//!
//! Loads tool definitions from a YAML document and provides ordered lookup.

use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Result, TransformError};
use crate::transform::Transform;

use super::definition::Tool;

const BUILTIN_CATALOG: &str = include_str!("catalog.yml");

/// YAML representation of a tool definition
#[derive(Debug, Deserialize)]
struct YamlTool {
    label: String,
    key: String,
    rule: Option<String>,
}

/// YAML file structure
#[derive(Debug, Deserialize)]
struct YamlCatalog {
    #[serde(rename = "tool", default)]
    tools: Vec<YamlTool>,
}

/// Ordered catalog of tools; insertion order is presentation order
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// The catalog compiled into the crate, listing every rule
    pub fn builtin() -> Self {
        Self::from_yaml(BUILTIN_CATALOG).unwrap_or_else(|e| {
            // the embedded document is covered by tests; fall back rather than abort
            warn!("Built-in catalog failed to load ({}), using rule keys as labels", e);
            Self {
                tools: Transform::ALL.iter().map(|t| Tool::new(t.key(), *t)).collect(),
            }
        })
    }

    /// Load catalog from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| TransformError::Catalog(format!("Failed to read catalog file: {}", e)))?;
        Self::from_yaml(&content)
    }

    /// Load catalog from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let catalog: YamlCatalog = serde_yaml::from_str(content)
            .map_err(|e| TransformError::Catalog(format!("Failed to parse YAML: {}", e)))?;

        let mut result = Self::new();
        for yaml_tool in catalog.tools {
            result.add(Self::convert_yaml_tool(yaml_tool)?)?;
        }

        debug!("Loaded catalog with {} tools", result.len());
        Ok(result)
    }

    /// Convert YAML tool to internal Tool struct
    fn convert_yaml_tool(yaml_tool: YamlTool) -> Result<Tool> {
        let rule_name = yaml_tool.rule.as_deref().unwrap_or(&yaml_tool.key);
        let rule = Transform::from_key(rule_name).ok_or_else(|| TransformError::InvalidRule {
            key: yaml_tool.key.clone(),
            rule: rule_name.to_string(),
        })?;

        Ok(Tool::new(yaml_tool.label, rule).with_key(yaml_tool.key))
    }

    /// Get a tool by selection key
    pub fn get(&self, key: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.key == key)
    }

    /// Apply the tool registered under `key`
    pub fn apply(&self, key: &str, input: &str) -> Result<String> {
        self.get(key)
            .map(|tool| tool.apply(input))
            .ok_or_else(|| TransformError::UnknownTool(key.to_string()))
    }

    /// Index of the tool registered under `key`
    pub fn position(&self, key: &str) -> Option<usize> {
        self.tools.iter().position(|t| t.key == key)
    }

    /// Tool at a presentation index
    pub fn at(&self, index: usize) -> Option<&Tool> {
        self.tools.get(index)
    }

    /// Selection keys in presentation order
    pub fn keys(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.key.as_str()).collect()
    }

    /// All tools in presentation order
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Append a tool; keys must be unique
    pub fn add(&mut self, tool: Tool) -> Result<()> {
        if self.contains(&tool.key) {
            return Err(TransformError::DuplicateKey(tool.key));
        }
        self.tools.push(tool);
        Ok(())
    }

    /// Check if a tool exists
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
