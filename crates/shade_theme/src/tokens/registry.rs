//! Named color token table

use rustc_hash::FxHashMap;

use super::{ColorToken, ThemeColor};

/// Named color token table.
///
/// Populated at startup (see [`crate::presets`]), optionally merged with
/// app overrides before first read, and consulted on every resolve of a
/// [`ThemeColor::Named`] reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorRegistry {
    tokens: FxHashMap<String, ColorToken>,
}

impl ColorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the registry for chaining.
    pub fn define(mut self, name: impl Into<String>, token: ColorToken) -> Self {
        self.insert(name, token);
        self
    }

    /// Inserts or replaces a token in place.
    pub fn insert(&mut self, name: impl Into<String>, token: ColorToken) {
        self.tokens.insert(name.into(), token);
    }

    /// The token registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ColorToken> {
        self.tokens.get(name)
    }

    /// Derived pressed-state token for a named entry.
    pub fn pressed(&self, name: &str) -> Option<ColorToken> {
        self.tokens.get(name).map(ColorToken::pressed)
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over registered token names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    /// Variant-wise merge of `overrides` into this registry.
    ///
    /// Existing variants not mentioned by an override are kept; mentioned
    /// ones are overwritten (key-wise last-write-wins). Overrides may
    /// introduce new tokens, and no completeness is required of anyone.
    pub fn merge<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, ColorToken)>,
    {
        for (name, token) in overrides {
            self.tokens.entry(name).or_default().merge_from(&token);
        }
    }

    /// Resolves a color for `theme`.
    ///
    /// Literals pass through unchanged; tokens look up their variant for
    /// `theme`; named references look the token up first. A miss falls
    /// back to resolving `fallback` the same way, and finally to `None` —
    /// an expected outcome the caller must tolerate, not an error.
    pub fn resolve(
        &self,
        color: &ThemeColor,
        theme: &str,
        fallback: Option<&ThemeColor>,
    ) -> Option<String> {
        let direct = match color {
            ThemeColor::Literal(value) => Some(value.clone()),
            ThemeColor::Token(token) => token.get(theme).map(str::to_owned),
            ThemeColor::Named(name) => self
                .tokens
                .get(name)
                .and_then(|token| token.get(theme))
                .map(str::to_owned),
        };
        direct.or_else(|| fallback.and_then(|fb| self.resolve(fb, theme, None)))
    }
}
