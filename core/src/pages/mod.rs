//! Documentation pages
//!
//! Every page is a closed [`Page`] variant paired with a [`PageRenderer`]
//! that appends its static content to a [`Document`].

mod backend;
mod frontend;
mod home;
mod machine_learning;

pub use backend::BackendPage;
pub use frontend::FrontendPage;
pub use home::HomePage;
pub use machine_learning::MachineLearningPage;

use crate::animation::AnimationSource;
use crate::config::ViewerConfig;
use crate::document::Document;
use crate::error::RegistryError;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// Selectable documentation page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Frontend,
    Backend,
    MachineLearning,
}

impl Page {
    /// All pages in menu order
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::Frontend,
        Page::Backend,
        Page::MachineLearning,
    ];

    /// Label shown in the selection control
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Frontend => "Frontend",
            Page::Backend => "Backend",
            Page::MachineLearning => "Machine Learning",
        }
    }

    /// Command-line friendly identifier
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Frontend => "frontend",
            Page::Backend => "backend",
            Page::MachineLearning => "machine-learning",
        }
    }

    /// The renderer that produces this page
    pub fn renderer(self) -> Box<dyn PageRenderer> {
        match self {
            Page::Home => Box::new(HomePage),
            Page::Frontend => Box::new(FrontendPage),
            Page::Backend => Box::new(BackendPage),
            Page::MachineLearning => Box::new(MachineLearningPage),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let normalized = needle.to_lowercase().replace(['_', ' '], "-");

        Page::ALL
            .into_iter()
            .find(|page| page.label().eq_ignore_ascii_case(needle) || page.slug() == normalized)
            .or_else(|| (normalized == "ml").then_some(Page::MachineLearning))
            .ok_or_else(|| RegistryError::UnknownLabel(needle.to_string()))
    }
}

/// Everything a page may use while rendering
pub struct RenderContext<'a> {
    pub config: &'a ViewerConfig,
    pub animations: &'a dyn AnimationSource,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a ViewerConfig, animations: &'a dyn AnimationSource) -> Self {
        Self { config, animations }
    }
}

/// Produces the display blocks of one page
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// The page this renderer draws
    fn page(&self) -> Page;

    /// Append the page content to `doc`
    async fn render(&self, ctx: &RenderContext<'_>, doc: &mut Document);
}

/// Append a subheader followed by its markdown body
pub(crate) fn section(doc: &mut Document, heading: &str, body: &str) {
    doc.subheader(heading).markdown(body.trim_end());
}
