//! Compiled style sheets with revision-stamped caching
//!
//! [`ThemedStyleSheet`] is the eager/global counterpart of the pure
//! resolution path: a [`StyleSheet`] compiled against a shared
//! [`ThemeState`]. Groups without deferred values are resolved once at
//! compile time and never again. Groups with deferred values carry a
//! per-group cache record stamped with the revision counters it was
//! produced at; a read whose stamps match the live counters returns the
//! identical `Arc` as the previous read, which is what lets a renderer's
//! own shallow-equality memoization skip redundant work.
//!
//! The cache is an owned map keyed by group name — no state is attached
//! to the values handed out, and cache entries are replaced rather than
//! mutated so old and new results never compare identical by reference.

use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;

use crate::state::{Revisions, ThemeState};
use crate::stylesheet::{ResolvedStyle, StyleGroup, StyleSheet};

/// A style sheet compiled against shared theme state.
///
/// Reads are cheap: between any two state mutations, repeated reads of
/// the same group return the same `Arc<ResolvedStyle>`.
pub struct ThemedStyleSheet {
    state: Arc<ThemeState>,
    groups: FxHashMap<String, CompiledGroup>,
}

enum CompiledGroup {
    /// No deferred values: resolved once, permanently valid.
    Static(Arc<ResolvedStyle>),
    /// Re-resolved whenever a revision counter has moved.
    Dynamic(DynamicGroup),
}

struct DynamicGroup {
    template: StyleGroup,
    cache: RwLock<Option<CacheEntry>>,
}

struct CacheEntry {
    /// Counter values the cached result was produced at.
    stamps: Revisions,
    value: Arc<ResolvedStyle>,
}

impl ThemedStyleSheet {
    /// Compiles `sheet` against `state`.
    ///
    /// The compiled sheet has no caller-supplied variable table, so
    /// variable markers resolve against an empty one — i.e. to their
    /// declared defaults.
    pub fn compile(sheet: StyleSheet, state: Arc<ThemeState>) -> Self {
        let ctx = state.context();
        let mut groups = FxHashMap::default();
        for (name, group) in sheet.into_groups() {
            let compiled = if group.has_dynamic() {
                CompiledGroup::Dynamic(DynamicGroup {
                    template: group,
                    cache: RwLock::new(None),
                })
            } else {
                CompiledGroup::Static(Arc::new(group.resolve(&ctx)))
            };
            groups.insert(name, compiled);
        }
        Self { state, groups }
    }

    /// Reads a compiled group.
    ///
    /// Unknown group names yield `None`. Known groups always resolve —
    /// possibly with unset properties where a token lacks the active
    /// theme's variant.
    pub fn get(&self, name: &str) -> Option<Arc<ResolvedStyle>> {
        match self.groups.get(name)? {
            CompiledGroup::Static(value) => Some(Arc::clone(value)),
            CompiledGroup::Dynamic(group) => Some(self.read_dynamic(name, group)),
        }
    }

    fn read_dynamic(&self, name: &str, group: &DynamicGroup) -> Arc<ResolvedStyle> {
        // Counters are sampled before the payload; a stamp can only lag a
        // concurrent write, forcing at worst one extra recompute.
        let live = self.state.revisions();

        if let Some(entry) = group.cache.read().unwrap().as_ref() {
            if entry.stamps == live {
                return Arc::clone(&entry.value);
            }
        }

        tracing::trace!(group = name, "re-resolving themed style group");
        let value = Arc::new(group.template.resolve(&self.state.context()));
        *group.cache.write().unwrap() = Some(CacheEntry {
            stamps: live,
            value: Arc::clone(&value),
        });
        value
    }

    /// The theme state this sheet was compiled against.
    pub fn state(&self) -> &Arc<ThemeState> {
        &self.state
    }

    /// Number of compiled groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no groups were compiled.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over compiled group names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
