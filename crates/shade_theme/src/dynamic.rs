//! Deferred style values
//!
//! Style templates embed [`DynamicProp`] markers wherever a property
//! depends on the active theme. Markers are plain data; resolving one is
//! a pure function of the marker and a [`ThemeContext`], which is what
//! makes resolved styles cacheable.

use serde::Serialize;

use crate::context::ThemeContext;
use crate::tokens::ThemeColor;

/// A style property value.
///
/// Values pass through resolution opaquely unless a marker asks for them
/// to be interpreted (a [`VarValue::Color`] reached through a color-var
/// marker is resolved; the same value reached through a plain var marker
/// is handed back as-is).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VarValue {
    Str(String),
    Number(f64),
    Bool(bool),
    /// A theme-dependent color payload.
    Color(ThemeColor),
    List(Vec<VarValue>),
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for VarValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for VarValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for VarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<ThemeColor> for VarValue {
    fn from(color: ThemeColor) -> Self {
        Self::Color(color)
    }
}

impl<T: Into<VarValue>> From<Vec<T>> for VarValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// A deferred, theme-dependent style value.
#[derive(Clone, Debug, PartialEq)]
pub enum DynamicProp {
    /// Resolved against the color table for the context's theme.
    Color(ThemeColor),
    /// Context variable lookup; the value passes through opaquely.
    Var { name: String, default: VarValue },
    /// Context variable holding a color, resolved after lookup.
    ColorVar { name: String, default: ThemeColor },
}

impl DynamicProp {
    /// Resolves this marker against `ctx`.
    ///
    /// Pure: identical `(marker, ctx)` pairs yield identical values, so
    /// callers may cache results keyed on the inputs. `None` means the
    /// property is unset for this context — never an error.
    pub fn resolve(&self, ctx: &ThemeContext) -> Option<VarValue> {
        match self {
            DynamicProp::Color(color) => ctx.resolve_color(color, None).map(VarValue::Str),
            DynamicProp::Var { name, default } => Some(ctx.resolve_var(name, default.clone())),
            DynamicProp::ColorVar { name, default } => {
                ctx.resolve_color_var(name, default).map(VarValue::Str)
            }
        }
    }
}

/// A style template property: a concrete literal or a deferred value.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleProp {
    Literal(VarValue),
    Dynamic(DynamicProp),
}

impl StyleProp {
    /// Returns true for deferred values.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, StyleProp::Dynamic(_))
    }
}

impl From<VarValue> for StyleProp {
    fn from(value: VarValue) -> Self {
        Self::Literal(value)
    }
}

impl From<DynamicProp> for StyleProp {
    fn from(marker: DynamicProp) -> Self {
        Self::Dynamic(marker)
    }
}

impl From<&str> for StyleProp {
    fn from(value: &str) -> Self {
        Self::Literal(value.into())
    }
}

impl From<String> for StyleProp {
    fn from(value: String) -> Self {
        Self::Literal(value.into())
    }
}

impl From<f64> for StyleProp {
    fn from(value: f64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<f32> for StyleProp {
    fn from(value: f32) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i32> for StyleProp {
    fn from(value: i32) -> Self {
        Self::Literal(value.into())
    }
}

impl From<bool> for StyleProp {
    fn from(value: bool) -> Self {
        Self::Literal(value.into())
    }
}

/// Marks a property as a theme color, resolved at read time.
pub fn dynamic_color(color: impl Into<ThemeColor>) -> StyleProp {
    StyleProp::Dynamic(DynamicProp::Color(color.into()))
}

/// Marks a property as a context variable with a default.
pub fn dynamic_var(name: impl Into<String>, default: impl Into<VarValue>) -> StyleProp {
    StyleProp::Dynamic(DynamicProp::Var {
        name: name.into(),
        default: default.into(),
    })
}

/// Marks a property as a context variable holding a theme color.
pub fn dynamic_color_var(name: impl Into<String>, default: impl Into<ThemeColor>) -> StyleProp {
    StyleProp::Dynamic(DynamicProp::ColorVar {
        name: name.into(),
        default: default.into(),
    })
}
