//! # comment-docs Core
//!
//! Core library for comment-docs - a terminal documentation viewer for the
//! Comment Analyzer project.
//!
//! This library provides the page registry, the static page content, the
//! render document model and the loader for the decorative animation shown
//! on the home page. Presentation (terminal UI and plain output) lives in
//! the CLI crate.

// Core modules
pub mod animation;
pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod markdown;
pub mod pages;
pub mod registry;

// Re-export commonly used types
pub use animation::{AnimationData, AnimationSource, HttpAnimationSource, LottieSummary};
pub use config::{LayoutPadding, SiteMetadata, ViewerConfig};
pub use dispatch::Dispatcher;
pub use document::{Block, Document};
pub use error::{Error, FetchError, RegistryError, Result};
pub use pages::{Page, PageRenderer, RenderContext};
pub use registry::{PageEntry, PageRegistry};

/// Initialize tracing with a specific debug mode
///
/// Without `debug` the filter comes from `RUST_LOG`, falling back to `warn`.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
