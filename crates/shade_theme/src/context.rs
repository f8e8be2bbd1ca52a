//! Explicit theme context
//!
//! A [`ThemeContext`] bundles everything marker resolution reads: the
//! theme id, the variable table, and a registry snapshot. It is a plain
//! value, decoupled from the live shared state, so templates can be
//! resolved against any context — a provider's current view, a test
//! fixture, or a theme that is not the active one.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::dynamic::VarValue;
use crate::tokens::{ColorRegistry, ThemeColor};

/// Inputs of marker resolution: theme id, variables, registry snapshot.
#[derive(Clone, Debug)]
pub struct ThemeContext {
    theme: String,
    tokens: Arc<ColorRegistry>,
    variables: FxHashMap<String, VarValue>,
}

impl ThemeContext {
    /// Creates a context with an empty variable table.
    pub fn new(theme: impl Into<String>, tokens: Arc<ColorRegistry>) -> Self {
        Self {
            theme: theme.into(),
            tokens,
            variables: FxHashMap::default(),
        }
    }

    /// Adds a variable, returning the context for chaining.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Replaces the whole variable table.
    pub fn with_variables(mut self, variables: FxHashMap<String, VarValue>) -> Self {
        self.variables = variables;
        self
    }

    /// The theme id this context resolves against.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The registry snapshot this context resolves against.
    pub fn tokens(&self) -> &ColorRegistry {
        &self.tokens
    }

    /// Raw variable lookup.
    pub fn var(&self, name: &str) -> Option<&VarValue> {
        self.variables.get(name)
    }

    /// Resolves a color against this context's theme.
    pub fn resolve_color(
        &self,
        color: &ThemeColor,
        fallback: Option<&ThemeColor>,
    ) -> Option<String> {
        self.tokens.resolve(color, &self.theme, fallback)
    }

    /// A variable's value, or `default` if it is not set.
    ///
    /// The value passes through opaquely; nothing is resolved further.
    pub fn resolve_var(&self, name: &str, default: impl Into<VarValue>) -> VarValue {
        self.variables
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    /// A variable interpreted as a color and resolved for this theme.
    ///
    /// Strings count as literal colors. A variable that is set but not
    /// color-shaped shadows the default and resolves to `None`.
    pub fn resolve_color_var(&self, name: &str, default: &ThemeColor) -> Option<String> {
        let color = match self.variables.get(name) {
            Some(VarValue::Color(color)) => color.clone(),
            Some(VarValue::Str(value)) => ThemeColor::Literal(value.clone()),
            Some(_) => return None,
            None => default.clone(),
        };
        self.resolve_color(&color, None)
    }
}
