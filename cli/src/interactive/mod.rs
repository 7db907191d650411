//! Interactive page browser

pub mod animation;
pub mod app;
pub mod components;
pub mod message;
pub mod selection;

pub use app::run_interactive;
