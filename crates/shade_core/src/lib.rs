//! Shade Core Runtime
//!
//! This crate provides the foundational primitives for the Shade theming
//! system:
//!
//! - **Change notification**: a payload-free listener registry used to
//!   announce global state changes (subscribers re-read state, they do not
//!   receive it)
//! - **Color values**: parsing and manipulation of color strings
//!   (`#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`)
//!
//! # Example
//!
//! ```rust
//! use shade_core::{parse_color, with_alpha, ChangeNotifier};
//!
//! let color = parse_color("#1989fa").unwrap();
//! assert_eq!(color.r, 0x19);
//!
//! // Half-transparent variant of an opaque color string
//! assert_eq!(with_alpha("#1989fa", 0.5).unwrap(), "rgba(25,137,250,0.5)");
//!
//! let notifier = ChangeNotifier::new();
//! let id = notifier.subscribe(|| {});
//! notifier.emit();
//! notifier.unsubscribe(id);
//! ```

pub mod color;
pub mod notify;

pub use color::{parse_color, with_alpha, ColorParseError, Rgba};
pub use notify::{ChangeNotifier, ListenerId};
