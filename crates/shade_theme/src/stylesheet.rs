//! Style templates and pure resolution
//!
//! A [`StyleSheet`] is a named set of [`StyleGroup`]s, declared once when
//! a component loads and never mutated afterwards. Properties are either
//! concrete literals or deferred [`DynamicProp`] markers.
//!
//! Resolution here is the pure path: [`StyleGroup::resolve`] and
//! [`StyleSheet::resolve_all`] take an explicit [`ThemeContext`] and hold
//! no state, so the caller owns any memoization. For the cached global
//! path, compile the sheet into a [`ThemedStyleSheet`].
//!
//! [`DynamicProp`]: crate::dynamic::DynamicProp
//! [`ThemedStyleSheet`]: crate::compiled::ThemedStyleSheet

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::compiled::ThemedStyleSheet;
use crate::context::ThemeContext;
use crate::dynamic::{StyleProp, VarValue};
use crate::state::ThemeState;

/// A named, immutable set of style groups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    groups: FxHashMap<String, StyleGroup>,
}

impl StyleSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group, returning the sheet for chaining.
    pub fn group(mut self, name: impl Into<String>, group: StyleGroup) -> Self {
        self.groups.insert(name.into(), group);
        self
    }

    /// The group declared under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&StyleGroup> {
        self.groups.get(name)
    }

    /// Number of declared groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no groups are declared.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over declared group names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Resolves every group against `ctx` (pure, uncached).
    pub fn resolve_all(&self, ctx: &ThemeContext) -> FxHashMap<String, ResolvedStyle> {
        self.groups
            .iter()
            .map(|(name, group)| (name.clone(), group.resolve(ctx)))
            .collect()
    }

    /// Compiles this sheet against shared theme state for cached reads.
    pub fn compile(self, state: &Arc<ThemeState>) -> ThemedStyleSheet {
        ThemedStyleSheet::compile(self, Arc::clone(state))
    }

    /// Compiles against the process-wide [`ThemeState::global`] instance.
    pub fn compile_global(self) -> ThemedStyleSheet {
        ThemedStyleSheet::compile(self, ThemeState::global())
    }

    pub(crate) fn into_groups(self) -> FxHashMap<String, StyleGroup> {
        self.groups
    }
}

/// One named group of style properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleGroup {
    props: FxHashMap<String, StyleProp>,
}

impl StyleGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the group for chaining.
    ///
    /// Literals and markers mix freely:
    ///
    /// ```rust
    /// use shade_theme::{dynamic_color, StyleGroup, ThemeColor};
    ///
    /// let group = StyleGroup::new()
    ///     .set("width", 10.0)
    ///     .set("color", dynamic_color(ThemeColor::named("text")));
    /// ```
    pub fn set(mut self, name: impl Into<String>, value: impl Into<StyleProp>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// The declared property, if any.
    pub fn get(&self, name: &str) -> Option<&StyleProp> {
        self.props.get(name)
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns true if no properties are declared.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Returns true if any property is a deferred value.
    pub fn has_dynamic(&self) -> bool {
        self.props.values().any(StyleProp::is_dynamic)
    }

    /// Resolves this group against `ctx` (pure, uncached).
    ///
    /// Literals are copied through verbatim; markers resolve via
    /// [`DynamicProp::resolve`](crate::dynamic::DynamicProp::resolve). A
    /// marker that cannot resolve leaves its property unset.
    pub fn resolve(&self, ctx: &ThemeContext) -> ResolvedStyle {
        let mut props = FxHashMap::default();
        for (name, prop) in &self.props {
            match prop {
                StyleProp::Literal(value) => {
                    props.insert(name.clone(), value.clone());
                }
                StyleProp::Dynamic(marker) => {
                    if let Some(value) = marker.resolve(ctx) {
                        props.insert(name.clone(), value);
                    }
                }
            }
        }
        ResolvedStyle { props }
    }
}

/// A fully resolved style group: concrete values only.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    props: FxHashMap<String, VarValue>,
}

impl ResolvedStyle {
    /// The resolved value, or `None` for unset properties.
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.props.get(name)
    }

    /// Number of set properties.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns true if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates over `(property, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarValue)> {
        self.props
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::{dynamic_color, dynamic_var};
    use crate::tokens::{ColorRegistry, ColorToken, ThemeColor, DARK, LIGHT};

    fn ctx(theme: &str) -> ThemeContext {
        let tokens = ColorRegistry::new().define("text", ColorToken::pair("#fff", "#000"));
        ThemeContext::new(theme, Arc::new(tokens))
    }

    fn sheet() -> StyleSheet {
        StyleSheet::new()
            .group(
                "box",
                StyleGroup::new()
                    .set("width", 10.0)
                    .set("color", dynamic_color(ThemeColor::named("text"))),
            )
            .group("plain", StyleGroup::new().set("elevation", 2.0))
    }

    #[test]
    fn literals_copy_through_and_markers_resolve() {
        let resolved = sheet().get("box").unwrap().resolve(&ctx(LIGHT));
        assert_eq!(resolved.get("width"), Some(&VarValue::Number(10.0)));
        assert_eq!(resolved.get("color"), Some(&VarValue::Str("#fff".into())));
    }

    #[test]
    fn unresolvable_markers_leave_the_property_unset() {
        let group = StyleGroup::new()
            .set("width", 10.0)
            .set("color", dynamic_color(ThemeColor::named("missing")));

        let resolved = group.resolve(&ctx(LIGHT));
        assert_eq!(resolved.get("color"), None);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn resolve_all_covers_every_group() {
        let all = sheet().resolve_all(&ctx(DARK));
        assert_eq!(all.len(), 2);
        assert_eq!(
            all["box"].get("color"),
            Some(&VarValue::Str("#000".into()))
        );
        assert_eq!(all["plain"].get("elevation"), Some(&VarValue::Number(2.0)));
    }

    #[test]
    fn resolution_is_deterministic_for_equal_inputs() {
        let group = StyleGroup::new()
            .set("gutter", dynamic_var("gutter", 5.0))
            .set("color", dynamic_color(ThemeColor::named("text")));

        let a = group.resolve(&ctx(LIGHT).with_var("gutter", 12.0));
        let b = group.resolve(&ctx(LIGHT).with_var("gutter", 12.0));
        assert_eq!(a, b);
    }

    #[test]
    fn has_dynamic_detects_markers() {
        assert!(sheet().get("box").unwrap().has_dynamic());
        assert!(!sheet().get("plain").unwrap().has_dynamic());
    }
}
