//! UI components for interactive mode
//!
//! This module contains reusable UI components for the page browser.

pub mod animation_widget;
pub mod content;
pub mod sidebar;
pub mod status_bar;

pub use content::ContentPane;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
