//! Machine learning service documentation

use super::{section, Page, PageRenderer, RenderContext};
use crate::document::Document;
use async_trait::async_trait;

const DESIGN_CONSIDERATIONS: &str =
    include_str!("../../content/machine_learning/design_considerations.md");
const KEY_FEATURES: &str = include_str!("../../content/machine_learning/key_features.md");
const TECHNOLOGICAL_STACK: &str =
    include_str!("../../content/machine_learning/technological_stack.md");
const TECHNICAL_DOCUMENTATION: &str =
    include_str!("../../content/machine_learning/technical_documentation.md");
const FUTURE_IMPROVEMENTS: &str =
    include_str!("../../content/machine_learning/future_improvements.md");

pub struct MachineLearningPage;

#[async_trait]
impl PageRenderer for MachineLearningPage {
    fn page(&self) -> Page {
        Page::MachineLearning
    }

    async fn render(&self, _ctx: &RenderContext<'_>, doc: &mut Document) {
        doc.title("🧠Machine Learning Documentation").divider();

        section(doc, "🔬 **Design Considerations**", DESIGN_CONSIDERATIONS);
        section(doc, "✨ **Key Features**", KEY_FEATURES);
        section(doc, "🛠️ **Technological Stack**", TECHNOLOGICAL_STACK);
        section(doc, "📄 **Technical Documentation**", TECHNICAL_DOCUMENTATION);
        section(doc, "📌 **Future Improvements**", FUTURE_IMPROVEMENTS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::document::Block;
    use crate::pages::test_support::{not_found, FakeSource};

    #[tokio::test]
    async fn test_future_improvements_is_last_section() {
        let config = ViewerConfig::default();
        let source = FakeSource::new(not_found);
        let ctx = RenderContext::new(&config, &source);

        let mut doc = Document::new();
        MachineLearningPage.render(&ctx, &mut doc).await;

        let last_subheader = doc.blocks().iter().rev().find_map(|b| match b {
            Block::Subheader(text) => Some(text.as_str()),
            _ => None,
        });
        assert_eq!(last_subheader, Some("📌 **Future Improvements**"));
    }
}
