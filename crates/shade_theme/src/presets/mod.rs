//! Built-in color token palette
//!
//! The standard palette every component refers to by name. It is
//! installed into the default global state and is the base layer an app
//! merges its own overrides onto (key-wise last-write-wins) before the
//! first style read.

use crate::tokens::{ColorRegistry, ColorToken};

/// The standard named token table.
pub fn standard_tokens() -> ColorRegistry {
    ColorRegistry::new()
        .define(
            "white",
            ColorToken::pair("#ffffff", "#000000")
                .variant("pressed_light", "#efefef65")
                .variant("pressed_dark", "#66666665"),
        )
        .define(
            "black",
            ColorToken::pair("#000000", "#ffffff")
                .variant("pressed_light", "#666666")
                .variant("pressed_dark", "#efefef"),
        )
        .define("grey", ColorToken::pair("#dddddd", "#222222"))
        .define("light", ColorToken::pair("#efefef", "#222222"))
        .define(
            "skeleton",
            ColorToken::pair("rgba(46,50,56,0.05)", "rgba(255,255,255,0.12)"),
        )
        .define("switch", ColorToken::pair("#dddddd", "#333333"))
        .define("notify", ColorToken::pair("#ffffff", "#222222"))
        .define("cell_border", ColorToken::pair("#efefef", "#212121"))
        .define("divider", ColorToken::pair("#dfdfdf", "#444444"))
        .define("border", ColorToken::pair("#eeeeee", "#212121"))
        .define(
            "mask",
            ColorToken::pair("rgba(0,0,0,0.4)", "rgba(255,255,255,0.2)"),
        )
        .define(
            "ghost",
            ColorToken::pair("rgba(255,255,255,0.2)", "rgba(0,0,0,0.4)"),
        )
        .define("background", ColorToken::pair("#f7f8fa", "#121213"))
        .define(
            "link",
            ColorToken::pair("#0b72cc", "#0a5699")
                .variant("pressed_light", "#0960ac")
                .variant("pressed_dark", "#043a69"),
        )
        .define("text", ColorToken::pair("#333333", "#dddddd"))
        .define("text_second", ColorToken::pair("#888888", "#aaaaaa"))
        .define(
            "default",
            ColorToken::pair("transparent", "transparent")
                .variant("pressed_light", "rgba(0,0,0,0.2)")
                .variant("pressed_dark", "rgba(255,255,255,0.2)"),
        )
        .define(
            "primary",
            ColorToken::pair("#1989fa", "#2190ff")
                .variant("pressed_light", "#0960ac88")
                .variant("pressed_dark", "#043a6999"),
        )
        .define(
            "success",
            ColorToken::pair("#07c160", "#038d45")
                .variant("pressed_light", "#06ae57")
                .variant("pressed_dark", "#06ae57"),
        )
        .define(
            "warning",
            ColorToken::pair("#f3c220", "#e9a302")
                .variant("pressed_light", "#e68860")
                .variant("pressed_dark", "#e68860"),
        )
        .define(
            "notice",
            ColorToken::pair("#ffffff", "#888888")
                .variant("pressed_light", "#efefef")
                .variant("pressed_dark", "#666666"),
        )
        .define(
            "danger",
            ColorToken::pair("#ee0a24", "#be1c06")
                .variant("pressed_light", "#d70920")
                .variant("pressed_dark", "#d70920"),
        )
}
