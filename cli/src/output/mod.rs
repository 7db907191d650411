//! Page output for the terminal
//!
//! `layout` turns a rendered document into display lines; `plain` prints
//! those lines with ANSI styling for the non-interactive commands.

pub mod layout;
pub mod plain;

pub use layout::{layout, AnimationView, DisplayLine, LayoutItem, LayoutOptions, Role};
pub use plain::{render_plain, PlainOptions};
