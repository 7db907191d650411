//! Configuration types for the documentation viewer
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use crate::pages::Page;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lottie animation shown on the home page
pub const DEFAULT_ANIMATION_URL: &str = "https://assets9.lottiefiles.com/packages/lf20_u4yrau.json";

/// Height of the animation widget in pixels
pub const DEFAULT_ANIMATION_HEIGHT: u32 = 300;

/// Upper bound on the animation request
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Largest accepted padding on any side, in terminal cells
pub const MAX_PADDING: u16 = 64;

/// Padding applied around the content pane, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPadding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Default for LayoutPadding {
    fn default() -> Self {
        // 1rem / 2rem / 2rem / 2rem
        Self {
            top: 1,
            right: 2,
            bottom: 2,
            left: 2,
        }
    }
}

/// Static text that frames every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Window / page title
    pub page_title: String,
    /// Icon shown next to the title
    pub page_icon: String,
    /// Heading at the top of the sidebar
    pub sidebar_title: String,
    /// Prompt above the selection control
    pub selection_prompt: String,
    /// Footer line at the bottom of the sidebar
    pub sidebar_footer: String,
    /// Whether the sidebar starts expanded
    pub sidebar_expanded: bool,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            page_title: "Comment Analyzer - YouTube Insights".to_string(),
            page_icon: "📊".to_string(),
            sidebar_title: "🔎 **Explore Comment Analyser**".to_string(),
            selection_prompt: "Navigate to:".to_string(),
            sidebar_footer: "©️ 2024 Comment Analyzer".to_string(),
            sidebar_expanded: true,
        }
    }
}

/// A fully resolved viewer configuration ready for use by core
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// URL of the decorative animation
    pub animation_url: String,
    /// Deadline for the animation request
    pub fetch_timeout: Duration,
    /// Whether the home page fetches the animation at all
    pub animation_enabled: bool,
    /// Animation widget height in pixels
    pub animation_height: u32,
    /// Page selected when the viewer starts
    pub default_page: Page,
    /// Content pane padding
    pub layout: LayoutPadding,
    /// Sidebar and title text
    pub site: SiteMetadata,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            animation_url: DEFAULT_ANIMATION_URL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            animation_enabled: true,
            animation_height: DEFAULT_ANIMATION_HEIGHT,
            default_page: Page::Home,
            layout: LayoutPadding::default(),
            site: SiteMetadata::default(),
        }
    }
}

impl ViewerConfig {
    /// Set the animation URL
    pub fn with_animation_url(mut self, url: impl Into<String>) -> Self {
        self.animation_url = url.into();
        self
    }

    /// Set the request deadline
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Disable the home page animation
    pub fn without_animation(mut self) -> Self {
        self.animation_enabled = false;
        self
    }

    /// Set the start page
    pub fn with_default_page(mut self, page: Page) -> Self {
        self.default_page = page;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_enabled
            && !self.animation_url.starts_with("http://")
            && !self.animation_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "animation_url".to_string(),
                value: self.animation_url.clone(),
            });
        }

        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "fetch_timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }

        if self.animation_height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "animation_height".to_string(),
                value: "0".to_string(),
            });
        }

        let padding = self.layout;
        for (side, value) in [
            ("top", padding.top),
            ("right", padding.right),
            ("bottom", padding.bottom),
            ("left", padding.left),
        ] {
            if value > MAX_PADDING {
                return Err(ConfigError::InvalidValue {
                    field: format!("padding.{}", side),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}
