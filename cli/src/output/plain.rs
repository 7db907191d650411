//! ANSI rendering of a page layout for non-interactive output

use super::layout::{AnimationView, DisplayLine, LayoutItem, Role};
use comment_docs_core::markdown::{LineKind, Span};
use unicode_width::UnicodeWidthStr;

pub const BOLD: &str = "\x1b[1m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const GRAY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const MAGENTA: &str = "\x1b[95m";
pub const CYAN: &str = "\x1b[96m";
pub const RESET: &str = "\x1b[0m";

/// Plain printer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainOptions {
    /// Emit ANSI escape codes
    pub color: bool,
    /// Cells added before every line
    pub left_padding: usize,
}

impl Default for PlainOptions {
    fn default() -> Self {
        Self {
            color: true,
            left_padding: 0,
        }
    }
}

fn paint(text: &str, codes: &[&str], color: bool) -> String {
    if !color || codes.is_empty() || text.is_empty() {
        return text.to_string();
    }
    format!("{}{}{}", codes.concat(), text, RESET)
}

fn role_codes(role: Role, kind: &LineKind) -> Vec<&'static str> {
    match (role, kind) {
        (Role::Title, _) => vec![BOLD, CYAN],
        (Role::Header, _) => vec![BOLD, YELLOW],
        (Role::Subheader, _) => vec![BOLD, GREEN],
        (Role::Divider, _) | (Role::Help, _) => vec![GRAY],
        (Role::Expander, _) => vec![BOLD],
        (Role::Button, _) => vec![BOLD, MAGENTA],
        (Role::Body, LineKind::Heading(_)) => vec![BOLD],
        (Role::Body, LineKind::Code { .. }) => vec![GRAY],
        (Role::Body, _) => vec![],
    }
}

fn span_codes(span: &Span) -> Vec<&'static str> {
    let mut codes = Vec::new();
    if span.style.strong {
        codes.push(BOLD);
    }
    if span.style.emphasis {
        codes.push(ITALIC);
    }
    if span.style.link {
        codes.push(UNDERLINE);
    }
    if span.style.code {
        codes.push(CYAN);
    }
    codes
}

fn render_line(line: &DisplayLine, options: &PlainOptions) -> String {
    let mut out = " ".repeat(options.left_padding + line.line.indent);
    let base = role_codes(line.role, &line.line.kind);

    if let Some(prefix) = &line.line.prefix {
        out.push_str(&paint(prefix, &base, options.color));
    }

    for span in &line.line.spans {
        let mut codes = base.clone();
        codes.extend(span_codes(span));
        out.push_str(&paint(&span.text, &codes, options.color));
    }
    out.trim_end().to_string()
}

fn render_animation(view: &AnimationView, options: &PlainOptions) -> Vec<String> {
    let captions = view.caption_lines();
    let title = format!("─ ✻ animation ({}px) ", view.height_px);
    let title_width = UnicodeWidthStr::width(title.as_str());
    let inner = captions
        .iter()
        .map(|c| UnicodeWidthStr::width(c.as_str()))
        .max()
        .unwrap_or(0)
        .max(title_width.saturating_sub(2))
        .max(20);
    let pad = " ".repeat(options.left_padding + view.indent);

    let mut lines = Vec::with_capacity(captions.len() + 2);
    let fill = inner + 2 - title_width;
    lines.push(format!("{}┌{}{}┐", pad, title, "─".repeat(fill)));
    for caption in &captions {
        let gap = inner - UnicodeWidthStr::width(caption.as_str());
        lines.push(format!("{}│ {}{} │", pad, caption, " ".repeat(gap)));
    }
    lines.push(format!("{}└{}┘", pad, "─".repeat(inner + 2)));

    lines
        .into_iter()
        .map(|line| paint(&line, &[MAGENTA], options.color))
        .collect()
}

/// Render laid-out items to a printable string
pub fn render_plain(items: &[LayoutItem], options: &PlainOptions) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            LayoutItem::Line(line) => {
                out.push_str(&render_line(line, options));
                out.push('\n');
            }
            LayoutItem::Animation(view) => {
                for line in render_animation(view, options) {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::layout::{layout, LayoutOptions};
    use comment_docs_core::{AnimationData, Document};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_plain_without_color() {
        let mut doc = Document::new();
        doc.title("📊 **Welcome**")
            .markdown("- **Sentiment**: tone")
            .button("🚀 **Analyze Comments**", Some("Click to begin"));

        let items = layout(&doc, &LayoutOptions { width: 40, expand_all: false });
        let text = render_plain(
            &items,
            &PlainOptions {
                color: false,
                left_padding: 2,
            },
        );

        assert_eq!(
            text,
            "  📊 Welcome\n\n  • Sentiment: tone\n\n  [ 🚀 Analyze Comments ]\n    Click to begin\n"
        );
    }

    #[test]
    fn test_color_wraps_spans() {
        let mut doc = Document::new();
        doc.markdown("plain **bold**");
        let items = layout(&doc, &LayoutOptions::default());
        let text = render_plain(&items, &PlainOptions::default());

        assert!(text.starts_with("plain "));
        assert!(text.contains(&format!("{}bold{}", BOLD, RESET)));
    }

    #[test]
    fn test_animation_box() {
        let mut doc = Document::new();
        doc.animation(AnimationData::new(json!({"nm": "Spin", "layers": []})), 300);
        let items = layout(&doc, &LayoutOptions::default());
        let text = render_plain(
            &items,
            &PlainOptions {
                color: false,
                left_padding: 0,
            },
        );

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("┌─ ✻ animation (300px) "));
        assert!(lines[1].starts_with("│ Spin"));
        assert!(lines[2].starts_with("└"));
        assert_eq!(
            UnicodeWidthStr::width(lines[0]),
            UnicodeWidthStr::width(lines[1])
        );
    }
}
