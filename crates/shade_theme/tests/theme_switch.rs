//! End-to-end flow: declare templates, compile against a theme state,
//! switch themes and merge overrides, and watch caches invalidate while
//! untouched reads stay reference-stable.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use shade_theme::{
    dynamic_color, dynamic_color_var, dynamic_var, ColorRegistry, ColorToken, StyleGroup,
    StyleSheet, ThemeColor, ThemeProvider, ThemeState, DARK, LIGHT,
};

fn test_state() -> Arc<ThemeState> {
    Arc::new(ThemeState::new(
        ColorRegistry::new()
            .define("text", ColorToken::pair("#ffffff", "#000000"))
            .define(
                "link",
                ColorToken::pair("#0b72cc", "#0a5699").variant("pressed_light", "#0960ac"),
            ),
        LIGHT,
    ))
}

fn sheet() -> StyleSheet {
    StyleSheet::new()
        .group(
            "box",
            StyleGroup::new()
                .set("width", 10.0)
                .set("color", dynamic_color(ThemeColor::named("text"))),
        )
        .group(
            "label",
            StyleGroup::new().set("font_size", 14.0).set("italic", true),
        )
}

#[test]
fn compiled_reads_follow_theme_switches() {
    let state = test_state();
    let styles = sheet().compile(&state);

    let light = styles.get("box").unwrap();
    assert_eq!(
        serde_json::to_value(light.as_ref()).unwrap(),
        json!({ "width": 10.0, "color": "#ffffff" })
    );

    state.set_theme(DARK);

    let dark = styles.get("box").unwrap();
    assert!(!Arc::ptr_eq(&light, &dark));
    assert_eq!(
        serde_json::to_value(dark.as_ref()).unwrap(),
        json!({ "width": 10.0, "color": "#000000" })
    );
}

#[test]
fn reads_between_mutations_share_one_resolution() {
    let state = test_state();
    let styles = sheet().compile(&state);

    let first = styles.get("box").unwrap();
    for _ in 0..5 {
        assert!(Arc::ptr_eq(&first, &styles.get("box").unwrap()));
    }

    state.merge_tokens(vec![(
        "text".to_owned(),
        ColorToken::new().variant(LIGHT, "#333333"),
    )]);

    let merged = styles.get("box").unwrap();
    assert!(!Arc::ptr_eq(&first, &merged));
    assert_eq!(
        serde_json::to_value(merged.as_ref()).unwrap(),
        json!({ "width": 10.0, "color": "#333333" })
    );
}

#[test]
fn marker_free_groups_never_recompute() {
    let state = test_state();
    let styles = sheet().compile(&state);

    let before = styles.get("label").unwrap();
    state.set_theme(DARK);
    state.merge_tokens(vec![("text".to_owned(), ColorToken::pair("#1", "#2"))]);
    assert!(Arc::ptr_eq(&before, &styles.get("label").unwrap()));
}

#[test]
fn unknown_group_reads_are_none_not_panics() {
    let styles = sheet().compile(&test_state());
    assert!(styles.get("nonexistent").is_none());
}

#[test]
fn renderers_are_notified_and_re_pull_state() {
    let state = test_state();
    let styles = sheet().compile(&state);
    let repaints = Arc::new(AtomicUsize::new(0));

    // A rendering layer subscribes once and re-reads styles on each event
    let counter = Arc::clone(&repaints);
    state.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let before = styles.get("box").unwrap();
    state.set_theme(DARK);
    assert_eq!(repaints.load(Ordering::SeqCst), 1);

    // The event carries no payload; the fresh value comes from re-reading
    let after = styles.get("box").unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn provider_contexts_drive_the_pure_path() {
    let state = test_state();
    let provider = ThemeProvider::new(Arc::clone(&state)).with_var("gutter", 12.0);

    let group = StyleGroup::new()
        .set("margin", dynamic_var("gutter", 5.0))
        .set("color", dynamic_color_var("tint", ThemeColor::named("link")));

    let resolved = group.resolve(&provider.context());
    assert_eq!(
        serde_json::to_value(&resolved).unwrap(),
        json!({ "margin": 12.0, "color": "#0b72cc" })
    );

    // A second provider without the variable falls back to defaults; the
    // transformer itself holds no state between the two calls
    let bare = ThemeProvider::new(Arc::clone(&state));
    let resolved = group.resolve(&bare.context());
    assert_eq!(
        serde_json::to_value(&resolved).unwrap(),
        json!({ "margin": 5.0, "color": "#0b72cc" })
    );
}

#[test]
fn resolved_colors_feed_the_color_utilities() {
    let state = test_state();
    let text = state.resolve(&ThemeColor::named("text"), None).unwrap();

    // Translucent overlays are derived from resolved values, not tokens
    assert_eq!(
        shade_core::with_alpha(&text, 0.5).unwrap(),
        "rgba(255,255,255,0.5)"
    );
}

#[test]
fn pressed_tokens_resolve_like_any_other_color() {
    let state = test_state();
    let pressed = state.tokens().pressed("link").unwrap();

    let group = StyleGroup::new().set("background", dynamic_color(pressed));
    let styles = StyleSheet::new().group("button", group).compile(&state);

    assert_eq!(
        styles
            .get("button")
            .unwrap()
            .get("background")
            .and_then(|v| serde_json::to_value(v).ok()),
        Some(json!("#0960ac"))
    );

    state.set_theme(DARK);
    assert_eq!(
        styles
            .get("button")
            .unwrap()
            .get("background")
            .and_then(|v| serde_json::to_value(v).ok()),
        Some(json!("#0a5699"))
    );
}
