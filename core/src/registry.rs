//! Page registry for the selection control

use crate::error::RegistryError;
use crate::pages::{Page, PageRenderer};

/// A registered page with its label and renderer
pub struct PageEntry {
    page: Page,
    label: String,
    renderer: Box<dyn PageRenderer>,
}

impl PageEntry {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn renderer(&self) -> &dyn PageRenderer {
        self.renderer.as_ref()
    }
}

impl std::fmt::Debug for PageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageEntry")
            .field("page", &self.page)
            .field("label", &self.label)
            .finish()
    }
}

/// Ordered association between menu labels and page renderers
#[derive(Debug, Default)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
}

impl PageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every page, in menu order
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for page in Page::ALL {
            registry.register(page, page.renderer());
        }
        registry
    }

    /// Register a renderer for `page`
    ///
    /// Registering a page twice replaces its renderer and keeps its position.
    pub fn register(&mut self, page: Page, renderer: Box<dyn PageRenderer>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.page == page) {
            entry.renderer = renderer;
            return;
        }

        self.entries.push(PageEntry {
            page,
            label: page.label().to_string(),
            renderer,
        });
    }

    /// Look up the renderer for a registered page
    pub fn resolve(&self, page: Page) -> Result<&dyn PageRenderer, RegistryError> {
        self.entries
            .iter()
            .find(|e| e.page == page)
            .map(PageEntry::renderer)
            .ok_or_else(|| RegistryError::NotRegistered(page.label().to_string()))
    }

    /// Look up a page by its menu label
    pub fn get_by_label(&self, label: &str) -> Option<&PageEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Entries in registration order
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Registered pages in registration order
    pub fn pages(&self) -> Vec<Page> {
        self.entries.iter().map(|e| e.page).collect()
    }

    /// Menu labels in registration order
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// The first registered page, selected when nothing else is configured
    pub fn first(&self) -> Option<Page> {
        self.entries.first().map(|e| e.page)
    }

    pub fn contains(&self, page: Page) -> bool {
        self.entries.iter().any(|e| e.page == page)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::document::Document;
    use crate::pages::test_support::{not_found, FakeSource};
    use crate::pages::RenderContext;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct StubPage(Page, &'static str);

    #[async_trait]
    impl PageRenderer for StubPage {
        fn page(&self) -> Page {
            self.0
        }

        async fn render(&self, _ctx: &RenderContext<'_>, doc: &mut Document) {
            doc.title(self.1);
        }
    }

    #[test]
    fn test_standard_registry_order() {
        let registry = PageRegistry::standard();
        assert_eq!(
            registry.labels(),
            vec!["Home", "Frontend", "Backend", "Machine Learning"]
        );
        assert_eq!(registry.first(), Some(Page::Home));
        assert_eq!(registry.len(), 4);
    }

    #[tokio::test]
    async fn test_resolve_dispatches_to_own_renderer() {
        let registry = PageRegistry::standard();
        let config = ViewerConfig::default().without_animation();
        let source = FakeSource::new(not_found);
        let ctx = RenderContext::new(&config, &source);

        let mut titles = Vec::new();
        for page in registry.pages() {
            let renderer = registry.resolve(page).unwrap();
            assert_eq!(renderer.page(), page);

            let mut doc = Document::new();
            renderer.render(&ctx, &mut doc).await;
            titles.push(doc.title_text().unwrap().to_string());
        }

        assert_eq!(
            titles,
            vec![
                "📊 **Welcome to Comment Analyzer!**",
                "🚀 **Frontend Documentation**",
                "🚀 **Backend Documentation**",
                "🧠Machine Learning Documentation",
            ]
        );
    }

    #[test]
    fn test_resolve_unregistered_page() {
        let mut registry = PageRegistry::new();
        registry.register(Page::Home, Page::Home.renderer());

        let err = registry.resolve(Page::Backend).err().unwrap();
        assert_eq!(err, RegistryError::NotRegistered("Backend".to_string()));
        assert!(!registry.contains(Page::Backend));
    }

    #[tokio::test]
    async fn test_register_twice_replaces_in_place() {
        let mut registry = PageRegistry::standard();
        registry.register(Page::Frontend, Box::new(StubPage(Page::Frontend, "stub")));

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.pages()[1], Page::Frontend);

        let config = ViewerConfig::default();
        let source = FakeSource::new(not_found);
        let ctx = RenderContext::new(&config, &source);
        let mut doc = Document::new();
        registry
            .resolve(Page::Frontend)
            .unwrap()
            .render(&ctx, &mut doc)
            .await;
        assert_eq!(doc.title_text(), Some("stub"));
    }

    #[test]
    fn test_get_by_label() {
        let registry = PageRegistry::standard();
        let entry = registry.get_by_label("Machine Learning").unwrap();
        assert_eq!(entry.page(), Page::MachineLearning);
        assert!(registry.get_by_label("Investor Pitch").is_none());
    }
}
