//! Token overrides from configuration files
//!
//! Apps customize the palette before the first style read by merging a
//! TOML file of per-theme values into the registry:
//!
//! ```toml
//! [colors.primary]
//! light = "#6200ee"
//! dark = "#bb86fc"
//! pressed_light = "#3700b3"
//!
//! [colors.brand]
//! light = "#ff6d00"
//! dark = "#ff9e40"
//! ```
//!
//! ```rust,no_run
//! use shade_theme::{config, ThemeState};
//!
//! let overrides = config::load_token_overrides("theme.toml")?;
//! ThemeState::global().merge_tokens(overrides);
//! # Ok::<(), shade_theme::ThemeConfigError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::tokens::ColorToken;

/// Error loading a token-override file.
#[derive(Debug, Error)]
pub enum ThemeConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// `[colors.<token>]` tables: token name → variant key → color string.
#[derive(Debug, Default, Deserialize)]
struct TokenOverrideFile {
    #[serde(default)]
    colors: FxHashMap<String, FxHashMap<String, String>>,
}

/// Parses TOML content into registry overrides.
pub fn parse_token_overrides(
    content: &str,
) -> Result<Vec<(String, ColorToken)>, toml::de::Error> {
    let file: TokenOverrideFile = toml::from_str(content)?;
    Ok(file
        .colors
        .into_iter()
        .map(|(name, variants)| {
            let mut token = ColorToken::new();
            for (theme, value) in variants {
                token.set(theme, value);
            }
            (name, token)
        })
        .collect())
}

/// Loads registry overrides from a TOML file.
pub fn load_token_overrides(
    path: impl AsRef<Path>,
) -> Result<Vec<(String, ColorToken)>, ThemeConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ThemeConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides = parse_token_overrides(&content).map_err(|source| ThemeConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        tokens = overrides.len(),
        "loaded color token overrides"
    );
    Ok(overrides)
}
