//! Frontend documentation

use super::{section, Page, PageRenderer, RenderContext};
use crate::document::Document;
use async_trait::async_trait;

const DESIGN_CONSIDERATIONS: &str = include_str!("../../content/frontend/design_considerations.md");
const KEY_FEATURES: &str = include_str!("../../content/frontend/key_features.md");
const TECHNOLOGICAL_STACK: &str = include_str!("../../content/frontend/technological_stack.md");
const TECHNICAL_DOCUMENTATION: &str =
    include_str!("../../content/frontend/technical_documentation.md");

pub struct FrontendPage;

#[async_trait]
impl PageRenderer for FrontendPage {
    fn page(&self) -> Page {
        Page::Frontend
    }

    async fn render(&self, _ctx: &RenderContext<'_>, doc: &mut Document) {
        doc.title("🚀 **Frontend Documentation**").divider();

        section(doc, "📝 **Design Considerations**", DESIGN_CONSIDERATIONS);
        section(doc, "✨ **Key Features**", KEY_FEATURES);
        section(doc, "🛠️ **Technological Stack**", TECHNOLOGICAL_STACK);
        section(doc, "📄 **Technical Documentation**", TECHNICAL_DOCUMENTATION);
    }
}
