//! Simple CLI configuration loader for comment-docs
//!
//! Implements single-source priority loading with overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./comment-docs.json or ./.comment-docs/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/comment-docs/config.json or ~/.config/comment-docs/config.json
//! 4. Built-in defaults (no file)
//!
//! Environment variables are applied on top of the file, and command-line
//! flags on top of the environment.

use anyhow::{anyhow, Context, Result};
use comment_docs_core::{LayoutPadding, Page, ViewerConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const ENV_ANIMATION_URL: &str = "COMMENT_DOCS_ANIMATION_URL";
pub const ENV_FETCH_TIMEOUT: &str = "COMMENT_DOCS_FETCH_TIMEOUT";
pub const ENV_NO_ANIMATION: &str = "COMMENT_DOCS_NO_ANIMATION";
pub const ENV_PAGE: &str = "COMMENT_DOCS_PAGE";

/// Raw configuration file format; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// URL of the home page animation
    pub animation_url: Option<String>,
    /// Request deadline in seconds
    pub fetch_timeout_secs: Option<u64>,
    /// Set to false to skip the animation request
    pub animation_enabled: Option<bool>,
    /// Animation height in pixels
    pub animation_height: Option<u32>,
    /// Start page label or slug
    pub default_page: Option<String>,
    /// Content pane padding
    pub padding: Option<LayoutPadding>,
}

/// CLI configuration loader
#[derive(Debug, Clone, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    animation_url_override: Option<String>,
    timeout_override: Option<u64>,
    page_override: Option<String>,
    no_animation: bool,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set animation URL override
    pub fn with_animation_url_override(mut self, url: String) -> Self {
        self.animation_url_override = Some(url);
        self
    }

    /// Set request timeout override in seconds
    pub fn with_timeout_override(mut self, seconds: u64) -> Self {
        self.timeout_override = Some(seconds);
        self
    }

    /// Set start page override
    pub fn with_page_override(mut self, page: String) -> Self {
        self.page_override = Some(page);
        self
    }

    /// Disable the animation request
    pub fn without_animation(mut self) -> Self {
        self.no_animation = true;
        self
    }

    /// Load and resolve configuration from the process environment
    pub async fn load(&self) -> Result<ViewerConfig> {
        let cwd = std::env::current_dir()?;
        self.load_in(&cwd, |key| std::env::var(key).ok()).await
    }

    /// Load and resolve configuration relative to `cwd` with the given environment
    pub async fn load_in<F>(&self, cwd: &Path, env: F) -> Result<ViewerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            let expanded = PathBuf::from(shellexpand::tilde(&override_path.to_string_lossy()).as_ref());
            self.load_from_path(&expanded).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load(cwd, &env).await?
        };

        // Step 2: Apply environment overrides
        apply_env(&mut config, &env)?;

        // Step 3: Apply flag overrides
        if let Some(url) = &self.animation_url_override {
            config.animation_url = Some(url.clone());
        }
        if let Some(seconds) = self.timeout_override {
            config.fetch_timeout_secs = Some(seconds);
        }
        if let Some(page) = &self.page_override {
            config.default_page = Some(page.clone());
        }
        if self.no_animation {
            config.animation_enabled = Some(false);
        }

        // Step 4: Resolve to final viewer config
        resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load<F>(&self, cwd: &Path, env: &F) -> Result<RawConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 1. Current working directory
        for candidate in [
            cwd.join("comment-docs.json"),
            cwd.join(".comment-docs").join("config.json"),
        ] {
            if candidate.is_file() {
                return self.load_file(&candidate).await;
            }
        }

        // 2. XDG config directory
        if let Some(config_dir) = xdg_config_dir(env) {
            let config_path = config_dir.join("comment-docs").join("config.json");
            if config_path.is_file() {
                return self.load_file(&config_path).await;
            }
        }

        // 3. Defaults only
        debug!("No configuration file found, using defaults");
        Ok(RawConfig::default())
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!("Loading configuration from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Get XDG config directory
fn xdg_config_dir<F>(env: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    env("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Overlay environment variables onto a raw config
fn apply_env<F>(config: &mut RawConfig, env: &F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = env(ENV_ANIMATION_URL) {
        config.animation_url = Some(url);
    }

    if let Some(timeout) = env(ENV_FETCH_TIMEOUT) {
        let seconds = timeout
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {}: {}", ENV_FETCH_TIMEOUT, timeout))?;
        config.fetch_timeout_secs = Some(seconds);
    }

    if env(ENV_NO_ANIMATION).is_some_and(|v| parse_flag(&v)) {
        config.animation_enabled = Some(false);
    }

    if let Some(page) = env(ENV_PAGE) {
        config.default_page = Some(page);
    }

    Ok(())
}

/// Resolve raw config to ViewerConfig
fn resolve_config(config: RawConfig) -> Result<ViewerConfig> {
    let mut resolved = ViewerConfig::default();

    if let Some(url) = config.animation_url {
        resolved.animation_url = url;
    }
    if let Some(seconds) = config.fetch_timeout_secs {
        resolved.fetch_timeout = Duration::from_secs(seconds);
    }
    if let Some(enabled) = config.animation_enabled {
        resolved.animation_enabled = enabled;
    }
    if let Some(height) = config.animation_height {
        resolved.animation_height = height;
    }
    if let Some(padding) = config.padding {
        resolved.layout = padding;
    }
    if let Some(page) = config.default_page {
        resolved.default_page = page
            .parse::<Page>()
            .with_context(|| format!("Invalid default page: {}", page))?;
    }

    // Validate
    resolved
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(resolved)
}
