//! Tool catalog - ordered registry of selectable transformations
//!
//! The catalog is configuration data: a YAML list of `{label, key, rule}`
//! records. Adding a tool means adding a record, not code.

mod catalog;
mod definition;

pub use catalog::ToolCatalog;
pub use definition::Tool;
