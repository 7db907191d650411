//! Document layout
//!
//! Flattens a [`Document`] into wrapped [`LayoutItem`]s. Both the terminal UI
//! and the plain printer draw from the same layout so the two never drift.

use comment_docs_core::markdown::{self, LineKind, Span, SpanStyle, StyledLine};
use comment_docs_core::{AnimationData, Block, Document, LottieSummary};

/// Pixels represented by one terminal row in the animation widget
pub const PIXELS_PER_ROW: u32 = 20;

/// Visual role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Title,
    Header,
    Subheader,
    Body,
    Divider,
    Expander,
    Button,
    Help,
}

/// A wrapped line with its role
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLine {
    pub role: Role,
    pub line: StyledLine,
}

impl DisplayLine {
    fn new(role: Role, line: StyledLine) -> Self {
        Self { role, line }
    }

    pub fn is_blank(&self) -> bool {
        self.line.kind == LineKind::Blank
    }
}

/// Animation widget placement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationView {
    pub summary: LottieSummary,
    pub height_px: u32,
    pub rows: u16,
    pub indent: usize,
}

impl AnimationView {
    fn new(data: &AnimationData, height_px: u32, indent: usize) -> Self {
        let rows = (height_px / PIXELS_PER_ROW).clamp(3, u16::MAX as u32) as u16;
        Self {
            summary: data.summary(),
            height_px,
            rows,
            indent,
        }
    }

    /// Text shown inside the widget
    pub fn caption_lines(&self) -> Vec<String> {
        let summary = &self.summary;
        let mut lines = Vec::new();

        let mut heading = summary
            .name
            .clone()
            .unwrap_or_else(|| "Lottie animation".to_string());
        if let (Some(w), Some(h)) = (summary.width, summary.height) {
            heading.push_str(&format!("  {}×{}", w.round() as u64, h.round() as u64));
        }
        lines.push(heading);

        match (summary.frame_count(), summary.frame_rate, summary.duration()) {
            (Some(frames), Some(rate), Some(duration)) => lines.push(format!(
                "{} frames @ {} fps ({:.1}s)",
                frames,
                rate,
                duration.as_secs_f64()
            )),
            (Some(frames), _, _) => lines.push(format!("{} frames", frames)),
            _ => {}
        }

        if summary.layers > 0 {
            lines.push(format!("{} layers", summary.layers));
        }
        lines
    }
}

/// One entry of the page layout
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutItem {
    Line(DisplayLine),
    Animation(AnimationView),
}

impl LayoutItem {
    /// Terminal rows the item occupies
    pub fn rows(&self) -> usize {
        match self {
            LayoutItem::Line(_) => 1,
            LayoutItem::Animation(view) => view.rows as usize,
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, LayoutItem::Line(line) if line.is_blank())
    }
}

/// Layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Available width in cells
    pub width: usize,
    /// Show expander bodies
    pub expand_all: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 80,
            expand_all: false,
        }
    }
}

/// Lay out a rendered document
pub fn layout(doc: &Document, options: &LayoutOptions) -> Vec<LayoutItem> {
    let mut items = Vec::new();
    layout_blocks(doc.blocks(), 0, options, &mut items);

    while items.last().is_some_and(LayoutItem::is_blank) {
        items.pop();
    }
    items
}

fn layout_blocks(blocks: &[Block], indent: usize, options: &LayoutOptions, out: &mut Vec<LayoutItem>) {
    for block in blocks {
        match block {
            Block::Title(text) => push_inline(out, Role::Title, text, indent, None, options),
            Block::Header(text) => push_inline(out, Role::Header, text, indent, None, options),
            Block::Subheader(text) => push_inline(out, Role::Subheader, text, indent, None, options),
            Block::Divider => {
                let mut rule = StyledLine::new(LineKind::Rule, indent);
                rule.spans.push(Span {
                    text: "─".repeat(options.width.saturating_sub(indent)),
                    style: SpanStyle::default(),
                });
                out.push(LayoutItem::Line(DisplayLine::new(Role::Divider, rule)));
            }
            Block::Markdown(text) => {
                for mut line in markdown::parse(text) {
                    line.indent += indent;
                    for wrapped in markdown::wrap(&line, options.width) {
                        out.push(LayoutItem::Line(DisplayLine::new(Role::Body, wrapped)));
                    }
                }
            }
            Block::Expander { label, blocks } => {
                let marker = if options.expand_all { "▾ " } else { "▸ " };
                push_inline(out, Role::Expander, label, indent, Some(marker), options);
                if options.expand_all {
                    layout_blocks(blocks, indent + 2, options, out);
                }
            }
            Block::Button { label, help } => {
                let mut spans = vec![plain_span("[ ")];
                spans.extend(markdown::inline(label));
                spans.push(plain_span(" ]"));
                push_spans(out, Role::Button, spans, indent, None, options);
                if let Some(help) = help {
                    push_inline(out, Role::Help, help, indent + 2, None, options);
                }
            }
            Block::Animation { data, height } => {
                out.push(LayoutItem::Animation(AnimationView::new(data, *height, indent)));
            }
        }

        if !matches!(out.last(), Some(item) if item.is_blank()) {
            out.push(LayoutItem::Line(DisplayLine::new(Role::Body, StyledLine::blank())));
        }
    }
}

fn plain_span(text: &str) -> Span {
    Span {
        text: text.to_string(),
        style: SpanStyle::default(),
    }
}

fn push_inline(
    out: &mut Vec<LayoutItem>,
    role: Role,
    text: &str,
    indent: usize,
    prefix: Option<&str>,
    options: &LayoutOptions,
) {
    push_spans(out, role, markdown::inline(text), indent, prefix, options);
}

fn push_spans(
    out: &mut Vec<LayoutItem>,
    role: Role,
    spans: Vec<Span>,
    indent: usize,
    prefix: Option<&str>,
    options: &LayoutOptions,
) {
    let line = StyledLine {
        kind: LineKind::Paragraph,
        indent,
        prefix: prefix.map(str::to_string),
        spans,
    };
    for wrapped in markdown::wrap(&line, options.width) {
        out.push(LayoutItem::Line(DisplayLine::new(role, wrapped)));
    }
}
