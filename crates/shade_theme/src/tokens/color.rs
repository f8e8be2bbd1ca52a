//! Per-theme color values

use rustc_hash::FxHashMap;
use serde::Serialize;

/// The built-in light theme id.
pub const LIGHT: &str = "light";
/// The built-in dark theme id.
pub const DARK: &str = "dark";

/// Variant key holding a pressed-state value shared by all themes.
const PRESSED: &str = "pressed";
/// Prefix of variant keys holding a per-theme pressed-state value.
const PRESSED_PREFIX: &str = "pressed_";

/// A named color with one concrete value per theme.
///
/// Variant keys are theme ids, plus the `pressed` / `pressed_<theme>`
/// convention keys that feed [`pressed`](ColorToken::pressed) derivation.
/// A token is not required to cover every theme; resolving a missing
/// variant yields `None`, never an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorToken {
    variants: FxHashMap<String, String>,
}

impl ColorToken {
    /// Creates a token with no variants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a token with `light` and `dark` variants, the common case.
    pub fn pair(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self::new().variant(LIGHT, light).variant(DARK, dark)
    }

    /// Adds a variant, returning the token for chaining.
    pub fn variant(mut self, theme: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(theme, value);
        self
    }

    /// Inserts or replaces a variant in place.
    pub fn set(&mut self, theme: impl Into<String>, value: impl Into<String>) {
        self.variants.insert(theme.into(), value.into());
    }

    /// The value for `theme`, if defined.
    pub fn get(&self, theme: &str) -> Option<&str> {
        self.variants.get(theme).map(String::as_str)
    }

    /// Returns true if no variants are defined.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterates over all `(variant key, value)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variants
            .iter()
            .map(|(theme, value)| (theme.as_str(), value.as_str()))
    }

    /// Theme ids actually covered by this token (pressed-state variant
    /// keys are derivation sources, not themes).
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.variants
            .keys()
            .map(String::as_str)
            .filter(|key| *key != PRESSED && !key.starts_with(PRESSED_PREFIX))
    }

    /// Derives the pressed-state token.
    ///
    /// For each theme this token covers, the pressed value is
    /// `pressed_<theme>` if defined, else `pressed`, else the theme's own
    /// value. Derivation is per theme because overrides are per theme.
    pub fn pressed(&self) -> ColorToken {
        let mut derived = ColorToken::new();
        let shared = self.variants.get(PRESSED);
        for theme in self.themes() {
            let value = self
                .variants
                .get(&format!("{PRESSED_PREFIX}{theme}"))
                .or(shared)
                .or_else(|| self.variants.get(theme));
            if let Some(value) = value {
                derived.set(theme, value.clone());
            }
        }
        derived
    }

    /// Variant-wise merge; values from `other` win on conflicts.
    pub fn merge_from(&mut self, other: &ColorToken) {
        for (theme, value) in &other.variants {
            self.variants.insert(theme.clone(), value.clone());
        }
    }
}

/// A color as written in a style declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// Concrete color string, used as-is in every theme.
    Literal(String),
    /// Inline per-theme variants.
    Token(ColorToken),
    /// A named token, looked up in the live registry at read time.
    Named(String),
}

impl ThemeColor {
    /// Reference to a named registry token.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl From<&str> for ThemeColor {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<String> for ThemeColor {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<ColorToken> for ThemeColor {
    fn from(token: ColorToken) -> Self {
        Self::Token(token)
    }
}
