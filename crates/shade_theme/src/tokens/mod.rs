//! Color tokens
//!
//! A [`ColorToken`] is a named color with one concrete value per theme;
//! the [`ColorRegistry`] is the mergeable table those tokens live in.
//! [`ThemeColor`] is what style declarations actually write: a literal
//! string, an inline token, or a by-name reference into the registry.

mod color;
mod registry;

pub use color::*;
pub use registry::*;
