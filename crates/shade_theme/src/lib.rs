//! Shade Theme System
//!
//! Theme-aware style resolution for the Shade component library: named
//! color tokens with one value per theme, deferred style values resolved
//! at read time, and revision-stamped caching of resolved style groups.
//!
//! # Overview
//!
//! - **Color tokens**: a mergeable registry of named colors
//!   ([`ColorRegistry`], [`ColorToken`]), each a map from theme id to a
//!   concrete color string, with derived pressed-state variants
//! - **Dynamic values**: [`dynamic_color`] / [`dynamic_var`] /
//!   [`dynamic_color_var`] markers embedded in style templates and
//!   resolved against a [`ThemeContext`]
//! - **Cached compilation**: [`StyleSheet::compile`] resolves groups
//!   against shared [`ThemeState`] and keeps the resolved objects
//!   reference-stable until the theme or the registry changes
//! - **Pure transforms**: [`StyleGroup::resolve`] /
//!   [`StyleSheet::resolve_all`] against an explicit context, for
//!   controlled setups and tests
//!
//! # Quick Start
//!
//! ```rust
//! use shade_theme::{dynamic_color, StyleGroup, StyleSheet, ThemeColor, ThemeState};
//!
//! // Declared once, at component load time
//! let styles = StyleSheet::new()
//!     .group(
//!         "card",
//!         StyleGroup::new()
//!             .set("padding", 12.0)
//!             .set("background", dynamic_color(ThemeColor::named("background"))),
//!     )
//!     .compile_global();
//!
//! // Read at render time; cached until the theme changes
//! let card = styles.get("card").unwrap();
//!
//! ThemeState::global().set_theme(shade_theme::DARK);
//! let dark_card = styles.get("card").unwrap();
//! assert_ne!(card.get("background"), dark_card.get("background"));
//! ```
//!
//! # Cache coherence
//!
//! Two independent counters age every cached resolution: the theme
//! revision (moves on [`ThemeState::set_theme`]) and the color revision
//! (moves on [`ThemeState::merge_tokens`]). Between any two mutations,
//! repeated reads of a compiled group return the identical `Arc`, so
//! renderers that memoize by identity skip redundant work. Missing
//! tokens, variables and groups degrade to unset values — the only
//! defect this crate guards against is returning a stale resolved
//! object, and that is covered by the revision stamps.

pub mod compiled;
pub mod config;
pub mod context;
pub mod dynamic;
pub mod presets;
pub mod provider;
pub mod state;
pub mod stylesheet;
pub mod tokens;

// Re-export commonly used types
pub use compiled::ThemedStyleSheet;
pub use config::{load_token_overrides, parse_token_overrides, ThemeConfigError};
pub use context::ThemeContext;
pub use dynamic::{dynamic_color, dynamic_color_var, dynamic_var, DynamicProp, StyleProp, VarValue};
pub use provider::ThemeProvider;
pub use state::{Revisions, ThemeState};
pub use stylesheet::{ResolvedStyle, StyleGroup, StyleSheet};
pub use tokens::{ColorRegistry, ColorToken, ThemeColor, DARK, LIGHT};
