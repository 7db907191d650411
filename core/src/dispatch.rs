//! Selection dispatcher
//!
//! Wires the immutable registry and configuration together. The UI hands it
//! a [`Page`] from the selection control and gets back a freshly rendered
//! [`Document`]; nothing is cached between selections.

use crate::animation::{AnimationSource, HttpAnimationSource};
use crate::config::ViewerConfig;
use crate::document::Document;
use crate::error::Result;
use crate::pages::{Page, RenderContext};
use crate::registry::PageRegistry;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Resolves a selection and renders the page
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<PageRegistry>,
    config: Arc<ViewerConfig>,
    animations: Arc<dyn AnimationSource>,
}

impl Dispatcher {
    pub fn new(
        registry: PageRegistry,
        config: ViewerConfig,
        animations: Arc<dyn AnimationSource>,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
            animations,
        }
    }

    /// Standard registry with an HTTP animation source bounded by the configured timeout
    pub fn from_config(config: ViewerConfig) -> Result<Self> {
        config.validate()?;
        let animations = HttpAnimationSource::new(config.fetch_timeout)?;
        Ok(Self::new(
            PageRegistry::standard(),
            config,
            Arc::new(animations),
        ))
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Page selected before any user interaction
    ///
    /// Falls back to the first registered page when the configured default
    /// is not registered.
    pub fn initial_page(&self) -> Page {
        let default = self.config.default_page;
        if self.registry.contains(default) {
            return default;
        }

        let first = self.registry.first().unwrap_or(Page::Home);
        warn!(
            "Default page '{}' is not registered, starting on '{}'",
            default, first
        );
        first
    }

    /// Options for the selection control, in registration order
    pub fn menu(&self) -> Vec<(Page, &str)> {
        self.registry
            .entries()
            .iter()
            .map(|entry| (entry.page(), entry.label()))
            .collect()
    }

    /// Render `page` from scratch
    pub async fn dispatch(&self, page: Page) -> Result<Document> {
        let renderer = self.registry.resolve(page)?;
        let ctx = RenderContext::new(&self.config, self.animations.as_ref());

        let started = Instant::now();
        let mut doc = Document::new();
        renderer.render(&ctx, &mut doc).await;

        debug!(
            "Rendered '{}' ({} blocks) in {:?}",
            page,
            doc.blocks().len(),
            started.elapsed()
        );
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, RegistryError};
    use crate::pages::test_support::{not_found, FakeSource};
    use pretty_assertions::assert_eq;

    fn dispatcher(registry: PageRegistry, config: ViewerConfig) -> (Dispatcher, Arc<FakeSource>) {
        let source = Arc::new(FakeSource::new(not_found));
        let dispatcher = Dispatcher::new(registry, config, source.clone());
        (dispatcher, source)
    }

    #[test]
    fn test_menu_follows_registration_order() {
        let (dispatcher, _) = dispatcher(PageRegistry::standard(), ViewerConfig::default());
        let labels: Vec<_> = dispatcher.menu().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["Home", "Frontend", "Backend", "Machine Learning"]);
        assert_eq!(dispatcher.initial_page(), Page::Home);
    }

    #[test]
    fn test_initial_page_uses_configured_default() {
        let config = ViewerConfig::default().with_default_page(Page::Backend);
        let (dispatcher, _) = dispatcher(PageRegistry::standard(), config);
        assert_eq!(dispatcher.initial_page(), Page::Backend);
    }

    #[test]
    fn test_initial_page_falls_back_to_first_entry() {
        let mut registry = PageRegistry::new();
        registry.register(Page::Frontend, Page::Frontend.renderer());
        let (dispatcher, _) = dispatcher(registry, ViewerConfig::default());
        assert_eq!(dispatcher.initial_page(), Page::Frontend);
    }

    #[tokio::test]
    async fn test_only_home_fetches() {
        let (dispatcher, source) = dispatcher(PageRegistry::standard(), ViewerConfig::default());

        for page in [Page::Frontend, Page::Backend, Page::MachineLearning] {
            dispatcher.dispatch(page).await.unwrap();
        }
        assert_eq!(source.calls(), 0);

        let doc = dispatcher.dispatch(Page::Home).await.unwrap();
        assert_eq!(source.calls(), 1);
        assert!(doc.animation_block().is_none());
    }

    #[tokio::test]
    async fn test_dispatch_is_repeatable() {
        let (dispatcher, _) = dispatcher(PageRegistry::standard(), ViewerConfig::default());
        let first = dispatcher.dispatch(Page::Backend).await.unwrap();
        let second = dispatcher.dispatch(Page::Backend).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_dispatch_unregistered_page() {
        let (dispatcher, _) = dispatcher(PageRegistry::new(), ViewerConfig::default());
        let err = dispatcher.dispatch(Page::Home).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Registry(RegistryError::NotRegistered(_))
        ));
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = ViewerConfig::default().with_animation_url("not a url");
        assert!(Dispatcher::from_config(config).is_err());

        let mut config = ViewerConfig::default();
        config.layout.right = u16::MAX;
        assert!(Dispatcher::from_config(config).is_err());
    }
}
