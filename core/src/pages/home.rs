//! Landing page with the project overview and the decorative animation

use super::{Page, PageRenderer, RenderContext};
use crate::document::Document;
use async_trait::async_trait;
use tracing::debug;

const INTRO: &str = include_str!("../../content/home/intro.md");
const KEY_FEATURES: &str = include_str!("../../content/home/key_features.md");
const FETCH_COMMENTS: &str = include_str!("../../content/home/fetch_comments.md");
const ANALYZE_DATA: &str = include_str!("../../content/home/analyze_data.md");
const GET_STARTED: &str = include_str!("../../content/home/get_started.md");

pub struct HomePage;

#[async_trait]
impl PageRenderer for HomePage {
    fn page(&self) -> Page {
        Page::Home
    }

    async fn render(&self, ctx: &RenderContext<'_>, doc: &mut Document) {
        doc.title("📊 **Welcome to Comment Analyzer!**")
            .markdown("### Gain Insights from YouTube Comments")
            .divider();

        // Fail open: any fetch problem just leaves the animation out
        if ctx.config.animation_enabled {
            match ctx.animations.fetch(&ctx.config.animation_url).await {
                Ok(data) => {
                    doc.animation(data, ctx.config.animation_height);
                }
                Err(e) => debug!("Skipping home animation: {}", e),
            }
        }

        doc.markdown(INTRO.trim_end())
            .divider()
            .header("🔍 **Key Features**")
            .markdown(KEY_FEATURES.trim_end())
            .divider()
            .header("🚗 **How It Works**")
            .expander("📥 Fetch Comments", |body| {
                body.markdown(FETCH_COMMENTS.trim_end());
            })
            .expander("📊 Analyze Data", |body| {
                body.markdown(ANALYZE_DATA.trim_end());
            })
            .divider()
            .header("🔗 **Get Started**")
            .markdown(GET_STARTED.trim_end())
            .button(
                "🚀 **Analyze Comments**",
                Some("Click to begin analyzing comments from a YouTube video!"),
            );
    }
}
