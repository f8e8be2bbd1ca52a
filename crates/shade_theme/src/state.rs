//! Shared theme state
//!
//! [`ThemeState`] holds the current theme id, the color token registry,
//! and the two revision counters that age resolved-style caches:
//! `theme` moves on [`set_theme`] (user-driven, rare) and `color` moves on
//! [`merge_tokens`] (app-config-driven, normally only at startup). A
//! cached value is valid iff it was produced at the live value of *both*
//! counters.
//!
//! Writers bump a counter only after the payload write has completed and
//! its lock has been released, so a reader can never pair an incremented
//! counter with stale data.
//!
//! [`set_theme`]: ThemeState::set_theme
//! [`merge_tokens`]: ThemeState::merge_tokens

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use shade_core::{ChangeNotifier, ListenerId};

use crate::context::ThemeContext;
use crate::presets;
use crate::tokens::{ColorRegistry, ColorToken, ThemeColor, LIGHT};

/// Global theme state instance
static THEME_STATE: OnceLock<Arc<ThemeState>> = OnceLock::new();

/// Snapshot of the two cache-aging counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Revisions {
    /// Bumped by [`ThemeState::set_theme`].
    pub theme: u64,
    /// Bumped by [`ThemeState::merge_tokens`].
    pub color: u64,
}

/// Current theme id plus the color registry, with revision counters and
/// a theme-changed listener registry.
///
/// A process-wide instance is available through [`global`]; tests and
/// embedders construct their own with [`new`] to stay isolated.
///
/// [`global`]: ThemeState::global
/// [`new`]: ThemeState::new
pub struct ThemeState {
    /// Current theme id
    theme: RwLock<String>,

    /// Registry snapshot, replaced wholesale on merge so contexts can
    /// hold cheap `Arc` snapshots
    tokens: RwLock<Arc<ColorRegistry>>,

    /// Counter aged by theme switches
    theme_revision: AtomicU64,

    /// Counter aged by registry merges
    color_revision: AtomicU64,

    /// Payload-free "theme changed" subscribers
    notifier: ChangeNotifier,
}

impl ThemeState {
    /// Creates an independent instance.
    pub fn new(tokens: ColorRegistry, theme: impl Into<String>) -> Self {
        Self {
            theme: RwLock::new(theme.into()),
            tokens: RwLock::new(Arc::new(tokens)),
            theme_revision: AtomicU64::new(0),
            color_revision: AtomicU64::new(0),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Installs a custom global instance (call once at app startup,
    /// before the first [`global`] read; later calls are ignored).
    ///
    /// [`global`]: ThemeState::global
    pub fn init(tokens: ColorRegistry, theme: impl Into<String>) {
        let _ = THEME_STATE.set(Arc::new(Self::new(tokens, theme)));
    }

    /// The process-wide instance.
    ///
    /// Created on first use with the standard palette and the light theme
    /// unless [`init`] installed one earlier.
    ///
    /// [`init`]: ThemeState::init
    pub fn global() -> Arc<ThemeState> {
        Arc::clone(
            THEME_STATE.get_or_init(|| Arc::new(Self::new(presets::standard_tokens(), LIGHT))),
        )
    }

    /// The current theme id.
    pub fn theme(&self) -> String {
        self.theme.read().unwrap().clone()
    }

    /// Switches the current theme and notifies subscribers.
    ///
    /// Setting the already-active theme is a no-op: no counter moves and
    /// no notification fires.
    pub fn set_theme(&self, theme: &str) {
        {
            let mut current = self.theme.write().unwrap();
            if *current == theme {
                return;
            }
            tracing::debug!(from = %current, to = theme, "switching theme");
            *current = theme.to_owned();
        }
        self.theme_revision.fetch_add(1, Ordering::SeqCst);
        self.notifier.emit();
    }

    /// Snapshot of the current registry.
    pub fn tokens(&self) -> Arc<ColorRegistry> {
        Arc::clone(&self.tokens.read().unwrap())
    }

    /// Merges token overrides into the registry and notifies subscribers.
    ///
    /// Merging is variant-wise (see [`ColorRegistry::merge`]). Snapshots
    /// taken before the merge keep their old contents.
    pub fn merge_tokens<I>(&self, overrides: I)
    where
        I: IntoIterator<Item = (String, ColorToken)>,
    {
        let overrides: Vec<(String, ColorToken)> = overrides.into_iter().collect();
        tracing::debug!(tokens = overrides.len(), "merging color token overrides");
        {
            let mut tokens = self.tokens.write().unwrap();
            let mut merged = (**tokens).clone();
            merged.merge(overrides);
            *tokens = Arc::new(merged);
        }
        self.color_revision.fetch_add(1, Ordering::SeqCst);
        self.notifier.emit();
    }

    /// Live values of both cache-aging counters.
    pub fn revisions(&self) -> Revisions {
        Revisions {
            theme: self.theme_revision.load(Ordering::SeqCst),
            color: self.color_revision.load(Ordering::SeqCst),
        }
    }

    /// Resolves a color against the current theme.
    pub fn resolve(&self, color: &ThemeColor, fallback: Option<&ThemeColor>) -> Option<String> {
        self.tokens().resolve(color, &self.theme(), fallback)
    }

    /// Snapshot context: current theme, current registry, no variables.
    pub fn context(&self) -> ThemeContext {
        ThemeContext::new(self.theme(), self.tokens())
    }

    /// Subscribes to theme-changed notifications.
    ///
    /// The event carries no payload; subscribers re-read state. Fired by
    /// both [`set_theme`] and [`merge_tokens`].
    ///
    /// [`set_theme`]: ThemeState::set_theme
    /// [`merge_tokens`]: ThemeState::merge_tokens
    pub fn subscribe<F>(&self, callback: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.notifier.subscribe(callback)
    }

    /// Removes a theme-changed subscription.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
