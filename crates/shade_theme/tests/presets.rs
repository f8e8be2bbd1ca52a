use shade_theme::presets::standard_tokens;
use shade_theme::{DARK, LIGHT};

#[test]
fn standard_palette_covers_light_and_dark_for_every_token() {
    let registry = standard_tokens();
    assert!(!registry.is_empty());

    for name in registry.names() {
        let token = registry.get(name).unwrap();
        assert!(
            token.get(LIGHT).is_some(),
            "token {name:?} should define a light variant"
        );
        assert!(
            token.get(DARK).is_some(),
            "token {name:?} should define a dark variant"
        );
    }
}

#[test]
fn standard_palette_contains_the_semantic_tokens() {
    let registry = standard_tokens();
    for name in [
        "text", "background", "border", "primary", "success", "warning", "danger", "link",
    ] {
        assert!(registry.get(name).is_some(), "missing token {name:?}");
    }
}

#[test]
fn interactive_tokens_have_distinct_pressed_variants() {
    let registry = standard_tokens();

    for name in ["primary", "success", "danger", "link"] {
        let token = registry.get(name).unwrap();
        let pressed = registry.pressed(name).unwrap();
        assert_ne!(
            pressed.get(LIGHT),
            token.get(LIGHT),
            "token {name:?} should press to a different light value"
        );
    }

    // Non-interactive tokens derive pressed values from their base
    let text = registry.get("text").unwrap();
    let pressed = registry.pressed("text").unwrap();
    assert_eq!(pressed.get(LIGHT), text.get(LIGHT));
    assert_eq!(pressed.get(DARK), text.get(DARK));
}

#[test]
fn light_and_dark_surfaces_differ() {
    let registry = standard_tokens();
    for name in ["background", "text", "grey", "divider"] {
        let token = registry.get(name).unwrap();
        assert_ne!(
            token.get(LIGHT),
            token.get(DARK),
            "token {name:?} should differ between schemes"
        );
    }
}
