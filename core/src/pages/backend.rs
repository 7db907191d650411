//! Backend documentation

use super::{section, Page, PageRenderer, RenderContext};
use crate::document::Document;
use async_trait::async_trait;

const DESIGN_CONSIDERATIONS: &str = include_str!("../../content/backend/design_considerations.md");
const KEY_FEATURES: &str = include_str!("../../content/backend/key_features.md");
const TECHNOLOGICAL_STACK: &str = include_str!("../../content/backend/technological_stack.md");
const TECHNICAL_DOCUMENTATION: &str =
    include_str!("../../content/backend/technical_documentation.md");

pub struct BackendPage;

#[async_trait]
impl PageRenderer for BackendPage {
    fn page(&self) -> Page {
        Page::Backend
    }

    async fn render(&self, _ctx: &RenderContext<'_>, doc: &mut Document) {
        doc.title("🚀 **Backend Documentation**").divider();

        section(doc, "🔧 **Design Considerations**", DESIGN_CONSIDERATIONS);
        section(doc, "✨ **Key Features**", KEY_FEATURES);
        section(doc, "🛠️ **Technological Stack**", TECHNOLOGICAL_STACK);
        section(doc, "📄 **Technical Documentation**", TECHNICAL_DOCUMENTATION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::document::Block;
    use crate::pages::test_support::{not_found, FakeSource};

    #[tokio::test]
    async fn test_backend_never_touches_the_network() {
        let config = ViewerConfig::default();
        let source = FakeSource::new(not_found);
        let ctx = RenderContext::new(&config, &source);

        let mut doc = Document::new();
        BackendPage.render(&ctx, &mut doc).await;

        assert_eq!(source.calls(), 0);
        let subheaders = doc
            .blocks()
            .iter()
            .filter(|b| matches!(b, Block::Subheader(_)))
            .count();
        assert_eq!(subheaders, 4);
    }
}
