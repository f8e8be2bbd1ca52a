//! Component-facing theme access
//!
//! A [`ThemeProvider`] binds a shared [`ThemeState`] to a flat table of
//! named variables and exposes the resolution helpers components use to
//! declare their themeable constants. Providers nest by construction:
//! each instance owns its whole variable table, and a nested provider
//! replaces the table rather than layering on top of its parent's.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::context::ThemeContext;
use crate::dynamic::VarValue;
use crate::state::ThemeState;
use crate::tokens::ThemeColor;

type ThemeChangeHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Theme state plus a variable table, with resolution helpers.
pub struct ThemeProvider {
    state: Arc<ThemeState>,
    variables: FxHashMap<String, VarValue>,
    on_theme_change: Option<ThemeChangeHandler>,
}

impl ThemeProvider {
    /// Creates a provider over `state` with an empty variable table.
    pub fn new(state: Arc<ThemeState>) -> Self {
        Self {
            state,
            variables: FxHashMap::default(),
            on_theme_change: None,
        }
    }

    /// Creates a provider over the process-wide state.
    pub fn global() -> Self {
        Self::new(ThemeState::global())
    }

    /// Adds a variable, returning the provider for chaining.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.set_var(name, value);
        self
    }

    /// Inserts or replaces a single variable.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<VarValue>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Replaces the whole variable table (nested providers flat-replace;
    /// there is no layering over an outer provider's table).
    pub fn set_variables(&mut self, variables: FxHashMap<String, VarValue>) {
        self.variables = variables;
    }

    /// Routes [`set_theme`](Self::set_theme) through `handler` instead of
    /// mutating the shared state (controlled-component pattern).
    pub fn on_theme_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_theme_change = Some(Box::new(handler));
        self
    }

    /// The theme state this provider reads.
    pub fn state(&self) -> &Arc<ThemeState> {
        &self.state
    }

    /// The current theme id.
    pub fn theme(&self) -> String {
        self.state.theme()
    }

    /// Requests a theme switch.
    ///
    /// With a theme-change handler installed the request is forwarded to
    /// it and the owner decides what to do; otherwise the shared state is
    /// mutated directly. Expected to be user-triggered and rare.
    pub fn set_theme(&self, theme: &str) {
        match &self.on_theme_change {
            Some(handler) => handler(theme),
            None => self.state.set_theme(theme),
        }
    }

    /// Resolves a color against the current theme.
    pub fn resolve_color(
        &self,
        color: &ThemeColor,
        fallback: Option<&ThemeColor>,
    ) -> Option<String> {
        self.state.resolve(color, fallback)
    }

    /// A variable's value, or `default` if it is not set.
    pub fn resolve_var(&self, name: &str, default: impl Into<VarValue>) -> VarValue {
        self.variables
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    /// A variable interpreted as a color and resolved for the current
    /// theme (same semantics as a color-var marker).
    pub fn resolve_color_var(&self, name: &str, default: impl Into<ThemeColor>) -> Option<String> {
        self.context().resolve_color_var(name, &default.into())
    }

    /// Resolves a whole set of variables in one call, so a component can
    /// declare all its themeable constants in one shot.
    pub fn resolve_vars<I>(&self, defaults: I) -> FxHashMap<String, VarValue>
    where
        I: IntoIterator<Item = (String, VarValue)>,
    {
        defaults
            .into_iter()
            .map(|(name, default)| {
                let value = self.variables.get(&name).cloned().unwrap_or(default);
                (name, value)
            })
            .collect()
    }

    /// Bulk counterpart of [`resolve_color_var`](Self::resolve_color_var).
    ///
    /// Keys whose color cannot be resolved for the current theme are
    /// omitted, so a map lookup reads the same as the single-key helper.
    pub fn resolve_color_vars<I>(&self, defaults: I) -> FxHashMap<String, String>
    where
        I: IntoIterator<Item = (String, ThemeColor)>,
    {
        let ctx = self.context();
        defaults
            .into_iter()
            .filter_map(|(name, default)| {
                ctx.resolve_color_var(&name, &default)
                    .map(|value| (name, value))
            })
            .collect()
    }

    /// Snapshot of this provider's view for the pure transform path.
    pub fn context(&self) -> ThemeContext {
        self.state.context().with_variables(self.variables.clone())
    }
}
