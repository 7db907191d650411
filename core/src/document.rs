//! Render document model
//!
//! A page render pass appends [`Block`]s to a [`Document`]. The document is a
//! plain value: presentation layers walk it, tests compare it.

use crate::animation::AnimationData;

/// One display element emitted by a page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Page title
    Title(String),
    /// Horizontal rule between sections
    Divider,
    /// Section heading
    Header(String),
    /// Sub-section heading
    Subheader(String),
    /// Markdown body
    Markdown(String),
    /// Collapsible section with nested blocks
    Expander { label: String, blocks: Vec<Block> },
    /// Button with hover help; carries no action
    Button { label: String, help: Option<String> },
    /// Decorative animation with a fixed height in pixels
    Animation { data: AnimationData, height: u32 },
}

impl Block {
    /// Short name of the block kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Title(_) => "title",
            Block::Divider => "divider",
            Block::Header(_) => "header",
            Block::Subheader(_) => "subheader",
            Block::Markdown(_) => "markdown",
            Block::Expander { .. } => "expander",
            Block::Button { .. } => "button",
            Block::Animation { .. } => "animation",
        }
    }
}

/// Ordered output of one render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Title(text.into()))
    }

    pub fn divider(&mut self) -> &mut Self {
        self.push(Block::Divider)
    }

    pub fn header(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Header(text.into()))
    }

    pub fn subheader(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Subheader(text.into()))
    }

    pub fn markdown(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Markdown(text.into()))
    }

    /// Append a collapsible section whose body is built by `build`
    pub fn expander<F>(&mut self, label: impl Into<String>, build: F) -> &mut Self
    where
        F: FnOnce(&mut Document),
    {
        let mut inner = Document::new();
        build(&mut inner);
        self.push(Block::Expander {
            label: label.into(),
            blocks: inner.blocks,
        })
    }

    pub fn button(&mut self, label: impl Into<String>, help: Option<&str>) -> &mut Self {
        self.push(Block::Button {
            label: label.into(),
            help: help.map(str::to_string),
        })
    }

    pub fn animation(&mut self, data: AnimationData, height: u32) -> &mut Self {
        self.push(Block::Animation { data, height })
    }

    fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// Top-level blocks in emission order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The first title block, if any
    pub fn title_text(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// The animation block, if the page emitted one
    pub fn animation_block(&self) -> Option<(&AnimationData, u32)> {
        self.blocks.iter().find_map(|block| match block {
            Block::Animation { data, height } => Some((data, *height)),
            _ => None,
        })
    }

    /// Number of expanders at any depth
    pub fn expander_count(&self) -> usize {
        fn count(blocks: &[Block]) -> usize {
            blocks
                .iter()
                .map(|block| match block {
                    Block::Expander { blocks, .. } => 1 + count(blocks),
                    _ => 0,
                })
                .sum()
        }
        count(&self.blocks)
    }
}
