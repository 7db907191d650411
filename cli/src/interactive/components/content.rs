//! Content pane component
//!
//! Draws the visible slice of a page layout, one terminal row per line.

use super::animation_widget::AnimationWidget;
use crate::output::{DisplayLine, LayoutItem, Role};
use comment_docs_core::markdown::{LineKind, Span, SpanStyle};
use iocraft::prelude::*;

/// Text attributes applied to a run of text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl TextStyle {
    /// Style for a line's role
    pub fn for_role(role: Role, kind: &LineKind) -> Self {
        let (color, bold) = match (role, kind) {
            (Role::Title, _) => (Some(Color::Cyan), true),
            (Role::Header, _) => (Some(Color::Yellow), true),
            (Role::Subheader, _) => (Some(Color::Green), true),
            (Role::Divider, _) | (Role::Help, _) => (Some(Color::DarkGrey), false),
            (Role::Expander, _) => (None, true),
            (Role::Button, _) => (Some(Color::Magenta), true),
            (Role::Body, LineKind::Heading(_)) => (None, true),
            (Role::Body, LineKind::Code { .. }) => (Some(Color::DarkGrey), false),
            (Role::Body, _) => (None, false),
        };
        Self {
            color,
            bold,
            underline: false,
        }
    }

    /// Layer inline markup on top of this style
    pub fn with_span(self, style: &SpanStyle) -> Self {
        let mut merged = self;
        merged.bold |= style.strong;
        merged.underline |= style.link;
        if style.code {
            merged.color = Some(Color::Cyan);
        } else if style.emphasis && merged.color.is_none() {
            merged.color = Some(Color::Grey);
        }
        merged
    }

    pub fn content(self, text: &str) -> MixedTextContent {
        let mut content = MixedTextContent::new(text);
        if let Some(color) = self.color {
            content = content.color(color);
        }
        if self.bold {
            content = content.weight(Weight::Bold);
        }
        if self.underline {
            content = content.decoration(TextDecoration::Underline);
        }
        content
    }
}

/// Styled runs for inline spans
pub fn span_contents(spans: &[Span], base: TextStyle) -> Vec<MixedTextContent> {
    spans
        .iter()
        .map(|span| base.with_span(&span.style).content(&span.text))
        .collect()
}

/// Styled runs for a laid-out line, including its indent and prefix
pub fn line_contents(line: &DisplayLine) -> Vec<MixedTextContent> {
    let base = TextStyle::for_role(line.role, &line.line.kind);
    let mut contents = Vec::new();

    if line.line.indent > 0 {
        contents.push(MixedTextContent::new(" ".repeat(line.line.indent)));
    }
    if let Some(prefix) = &line.line.prefix {
        contents.push(base.content(prefix));
    }
    contents.extend(span_contents(&line.line.spans, base));

    // Keep blank lines one row tall
    if contents.is_empty() {
        contents.push(MixedTextContent::new(" "));
    }
    contents
}

#[derive(Default, Props)]
pub struct ContentPaneProps {
    /// Visible layout items, top to bottom
    pub items: Vec<LayoutItem>,
}

/// Content pane component
#[component]
pub fn ContentPane(props: &ContentPaneProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(flex_direction: FlexDirection::Column, flex_grow: 1.0) {
            #(props.items.iter().enumerate().map(|(index, item)| match item {
                LayoutItem::Line(line) => element! {
                    View(key: index, height: 1) {
                        MixedText(contents: line_contents(line), wrap: TextWrap::NoWrap)
                    }
                }
                .into_any(),
                LayoutItem::Animation(view) => element! {
                    View(key: index, padding_left: view.indent as u32) {
                        AnimationWidget(view: view.clone())
                    }
                }
                .into_any(),
            }))
        }
    }
}
