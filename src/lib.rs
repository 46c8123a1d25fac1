//! transform-text - small text transformation toolkit
//!
//! Pure string-to-string rules (newline escaping, case conversion, style-guide
//! title casing) exposed through an ordered, configurable tool catalog.

pub mod catalog;
pub mod error;
pub mod transform;

pub use catalog::{Tool, ToolCatalog};
pub use error::{Result, TransformError};
pub use transform::Transform;
