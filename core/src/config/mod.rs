//! Minimal configuration module for comment-docs core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{
    LayoutPadding, SiteMetadata, ViewerConfig, DEFAULT_ANIMATION_HEIGHT, DEFAULT_ANIMATION_URL,
    DEFAULT_FETCH_TIMEOUT_SECS,
};
