//! Markdown to styled terminal lines
//!
//! Page bodies are CommonMark. This module flattens them into
//! [`StyledLine`]s that both the terminal UI and the plain printer can draw
//! without knowing anything about markdown.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Inline emphasis carried by a span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    pub link: bool,
}

/// A run of text with one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// What kind of block a line belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading(u8),
    Paragraph,
    ListItem,
    Code { lang: Option<String> },
    Rule,
    Blank,
}

/// One display line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub kind: LineKind,
    /// Leading cells before the prefix
    pub indent: usize,
    /// List marker such as `• ` or `2. `
    pub prefix: Option<String>,
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new(kind: LineKind, indent: usize) -> Self {
        Self {
            kind,
            indent,
            prefix: None,
            spans: Vec::new(),
        }
    }

    pub fn blank() -> Self {
        Self::new(LineKind::Blank, 0)
    }

    /// Line text without indent or prefix
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width of indent, prefix and text
    pub fn width(&self) -> usize {
        self.indent
            + self.prefix.as_deref().map(UnicodeWidthStr::width).unwrap_or(0)
            + self
                .spans
                .iter()
                .map(|s| UnicodeWidthStr::width(s.text.as_str()))
                .sum::<usize>()
    }

    fn push_text(&mut self, text: &str, style: SpanStyle) {
        push_span(&mut self.spans, text, style);
    }

    fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }
}

fn push_span(spans: &mut Vec<Span>, text: &str, style: SpanStyle) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => spans.push(Span {
            text: text.to_string(),
            style,
        }),
    }
}

/// One open list
struct ListLevel {
    /// Next ordinal for ordered lists
    next: Option<u64>,
    /// Column of the item markers
    indent: usize,
    /// Column of the current item's text, where its child blocks go
    content: usize,
    /// Items wrap their blocks in paragraphs
    loose: bool,
}

/// Walks parser events and collects lines
struct LineBuilder {
    lines: Vec<StyledLine>,
    current: Option<StyledLine>,
    lists: Vec<ListLevel>,
    style: SpanStyle,
    code_lang: Option<Option<String>>,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: None,
            lists: Vec::new(),
            style: SpanStyle::default(),
            code_lang: None,
        }
    }

    /// Indent for blocks at the current nesting level
    fn block_indent(&self) -> usize {
        self.lists.last().map(|l| l.content).unwrap_or(0)
    }

    fn in_loose_item(&self) -> bool {
        self.lists.last().is_some_and(|l| l.loose)
    }

    fn flush(&mut self) {
        if let Some(line) = self.current.take() {
            if !line.is_empty() || line.prefix.is_some() {
                self.lines.push(line);
            }
        }
    }

    /// Separate top-level blocks and the blocks of loose items with one blank line
    fn end_block(&mut self) {
        self.flush();
        if self.lists.is_empty() || self.in_loose_item() {
            self.blank();
        }
    }

    fn blank(&mut self) {
        if !matches!(self.lines.last(), None | Some(StyledLine { kind: LineKind::Blank, .. })) {
            self.lines.push(StyledLine::blank());
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(lang) = &self.code_lang {
            let indent = self.block_indent();
            for raw in text.lines() {
                let mut line = StyledLine::new(LineKind::Code { lang: lang.clone() }, indent);
                line.push_text(raw, SpanStyle::default());
                self.lines.push(line);
            }
            return;
        }

        let style = self.style;
        let indent = self.block_indent();
        self.current
            .get_or_insert_with(|| StyledLine::new(LineKind::Paragraph, indent))
            .push_text(text, style);
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.current = Some(StyledLine::new(LineKind::Heading(level as u8), 0));
            }
            Tag::Paragraph => {
                // Only loose list items wrap their text in a paragraph
                if let Some(level) = self.lists.last_mut() {
                    level.loose = true;
                }
                if !matches!(self.current, Some(StyledLine { kind: LineKind::ListItem, .. })) {
                    self.flush();
                    self.current = Some(StyledLine::new(LineKind::Paragraph, self.block_indent()));
                }
            }
            Tag::List(start) => {
                self.flush();
                let indent = self.block_indent();
                self.lists.push(ListLevel {
                    next: start,
                    indent,
                    content: indent,
                    loose: false,
                });
            }
            Tag::Item => {
                self.flush();
                let Some(level) = self.lists.last_mut() else {
                    return;
                };
                let prefix = match level.next.as_mut() {
                    Some(n) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    None => "• ".to_string(),
                };
                level.content = level.indent + UnicodeWidthStr::width(prefix.as_str());
                let mut line = StyledLine::new(LineKind::ListItem, level.indent);
                line.prefix = Some(prefix);
                self.current = Some(line);
            }
            Tag::CodeBlock(kind) => {
                self.flush();
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                self.code_lang = Some(lang);
            }
            Tag::Strong => self.style.strong = true,
            Tag::Emphasis => self.style.emphasis = true,
            Tag::Link { .. } => self.style.link = true,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => self.end_block(),
            TagEnd::Paragraph => self.end_block(),
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() || self.in_loose_item() {
                    self.blank();
                }
            }
            TagEnd::Item => self.flush(),
            TagEnd::CodeBlock => {
                self.code_lang = None;
                self.end_block();
            }
            TagEnd::Strong => self.style.strong = false,
            TagEnd::Emphasis => self.style.emphasis = false,
            TagEnd::Link => self.style.link = false,
            _ => {}
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                let style = SpanStyle {
                    code: true,
                    ..self.style
                };
                let indent = self.block_indent();
                self.current
                    .get_or_insert_with(|| StyledLine::new(LineKind::Paragraph, indent))
                    .push_text(&code, style);
            }
            Event::Html(html) | Event::InlineHtml(html) => self.text(html.trim_end()),
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => {
                let continuation = self.current.as_ref().map(|line| {
                    let hang = line.prefix.as_deref().map(UnicodeWidthStr::width).unwrap_or(0);
                    StyledLine::new(line.kind.clone(), line.indent + hang)
                });
                self.flush();
                self.current = continuation;
            }
            Event::Rule => {
                self.flush();
                self.lines.push(StyledLine::new(LineKind::Rule, 0));
                self.blank();
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<StyledLine> {
        self.flush();
        while matches!(self.lines.last(), Some(StyledLine { kind: LineKind::Blank, .. })) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Parse a markdown body into unwrapped display lines
pub fn parse(markdown: &str) -> Vec<StyledLine> {
    let mut builder = LineBuilder::new();
    for event in Parser::new_ext(markdown, Options::empty()) {
        builder.event(event);
    }
    builder.finish()
}

/// Inline spans of a one-line string such as a title
pub fn inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    for line in parse(text) {
        for span in line.spans {
            push_span(&mut spans, &span.text, span.style);
        }
    }
    spans
}

/// Text with markup removed
pub fn plain(text: &str) -> String {
    inline(text).into_iter().map(|s| s.text).collect()
}

/// Word-wrap a line to `width` display cells
///
/// Code lines and rules are returned as they are. Continuation lines hang
/// under the text of a list item.
pub fn wrap(line: &StyledLine, width: usize) -> Vec<StyledLine> {
    if matches!(line.kind, LineKind::Code { .. } | LineKind::Rule | LineKind::Blank)
        || line.width() <= width
    {
        return vec![line.clone()];
    }

    let hang = line.prefix.as_deref().map(UnicodeWidthStr::width).unwrap_or(0);
    let avail = width.saturating_sub(line.indent + hang).max(1);

    let mut out = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    let mut current_width = 0;
    let mut pending_space = false;

    let emit = |spans: Vec<Span>, out: &mut Vec<StyledLine>| {
        let first = out.is_empty();
        out.push(StyledLine {
            kind: line.kind.clone(),
            indent: if first { line.indent } else { line.indent + hang },
            prefix: if first { line.prefix.clone() } else { None },
            spans,
        });
    };

    for span in &line.spans {
        for (i, word) in span.text.split(' ').enumerate() {
            if i > 0 {
                pending_space = true;
            }
            if word.is_empty() {
                continue;
            }

            let word_width = UnicodeWidthStr::width(word);
            let space = usize::from(pending_space && current_width > 0);

            if current_width > 0 && current_width + space + word_width > avail {
                emit(std::mem::take(&mut current), &mut out);
                current_width = 0;
            } else if space == 1 {
                push_span(&mut current, " ", span.style);
                current_width += 1;
            }
            pending_space = false;

            if word_width <= avail {
                push_span(&mut current, word, span.style);
                current_width += word_width;
                continue;
            }

            // Break words that cannot fit on any line
            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + ch_width > avail && current_width > 0 {
                    emit(std::mem::take(&mut current), &mut out);
                    current_width = 0;
                }
                let mut buf = [0u8; 4];
                push_span(&mut current, ch.encode_utf8(&mut buf), span.style);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() || out.is_empty() {
        emit(current, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines
            .iter()
            .map(|l| format!("{}{}", l.prefix.clone().unwrap_or_default(), l.text()))
            .collect()
    }

    #[test]
    fn test_bullets_with_strong_labels() {
        let lines = parse("- **Sentiment Analysis**: positive or negative.\n- **Word Clouds**: themes.");
        assert_eq!(
            texts(&lines),
            vec![
                "• Sentiment Analysis: positive or negative.",
                "• Word Clouds: themes."
            ]
        );
        assert_eq!(lines[0].kind, LineKind::ListItem);
        assert!(lines[0].spans[0].style.strong);
        assert!(!lines[0].spans[1].style.strong);
    }

    #[test]
    fn test_ordered_list_keeps_numbers() {
        let lines = parse("1. First\n2. Second\n3. Third");
        assert_eq!(texts(&lines), vec!["1. First", "2. Second", "3. Third"]);
    }

    #[test]
    fn test_nested_list_indents() {
        let lines = parse("- **Metrics**:\n    - **Accuracy**: 85%\n    - **Recall**: 80%");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].indent, 0);
        assert_eq!(lines[1].indent, 2);
        assert_eq!(lines[1].text(), "Accuracy: 85%");
    }

    #[test]
    fn test_loose_item_children_sit_under_item_text() {
        let source = "1. **Models:**\n\n   Schemas live here.\n\n\
                      2. **Controllers:**\n   - `AuthController.js`: Sign in.\n\n   \
                      **Example: `CommentController.js`**\n\n   ```javascript\n   const x = 1;\n   ```\n\n\
                      3. **Routes:**\n";
        let lines = parse(source);
        let shape: Vec<(usize, String)> = lines
            .iter()
            .map(|l| (l.indent, format!("{}{}", l.prefix.clone().unwrap_or_default(), l.text())))
            .collect();

        let expected: Vec<(usize, String)> = vec![
            (0, "1. Models:"),
            (0, ""),
            (3, "Schemas live here."),
            (0, ""),
            (0, "2. Controllers:"),
            (0, ""),
            (3, "• AuthController.js: Sign in."),
            (0, ""),
            (3, "Example: CommentController.js"),
            (0, ""),
            (3, "const x = 1;"),
            (0, ""),
            (0, "3. Routes:"),
        ]
        .into_iter()
        .map(|(indent, text)| (indent, text.to_string()))
        .collect();
        assert_eq!(shape, expected);
        assert_eq!(
            lines[10].kind,
            LineKind::Code {
                lang: Some("javascript".to_string())
            }
        );
    }

    #[test]
    fn test_fenced_code_is_verbatim() {
        let lines = parse("Intro\n\n```python\ndef f():\n    return 1\n```\n");
        assert_eq!(lines[0].text(), "Intro");
        assert_eq!(lines[1].kind, LineKind::Blank);
        assert_eq!(
            lines[2].kind,
            LineKind::Code {
                lang: Some("python".to_string())
            }
        );
        assert_eq!(lines[3].text(), "    return 1");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_heading_and_link_text() {
        let lines = parse("### Gain Insights\n\n**[Start Analyzing Now](#)** today");
        assert_eq!(lines[0].kind, LineKind::Heading(3));
        assert_eq!(lines[0].text(), "Gain Insights");
        let last = lines.last().unwrap();
        assert_eq!(last.text(), "Start Analyzing Now today");
        assert!(last.spans[0].style.link && last.spans[0].style.strong);
    }

    #[test]
    fn test_inline_code_span() {
        let lines = parse("1. `index.html`: Entry point.");
        assert_eq!(lines[0].spans[0].text, "index.html");
        assert!(lines[0].spans[0].style.code);
    }

    #[test]
    fn test_plain_strips_markup() {
        assert_eq!(plain("📊 **Welcome to Comment Analyzer!**"), "📊 Welcome to Comment Analyzer!");
        assert_eq!(plain("🧠Machine Learning Documentation"), "🧠Machine Learning Documentation");
    }

    #[test]
    fn test_wrap_hangs_under_prefix() {
        let lines = parse("- alpha beta gamma delta");
        let wrapped = wrap(&lines[0], 14);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped[0].prefix.as_deref(), Some("• "));
        assert_eq!(wrapped[0].text(), "alpha beta");
        assert_eq!(wrapped[1].prefix, None);
        assert_eq!(wrapped[1].indent, 2);
        assert_eq!(wrapped[1].text(), "gamma delta");
        assert!(wrapped.iter().all(|l| l.width() <= 14));
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let line = parse("abcdefghij").remove(0);
        let wrapped = wrap(&line, 4);
        assert_eq!(texts(&wrapped), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_leaves_code_alone() {
        let lines = parse("```\na very long line of code that should not wrap\n```");
        assert_eq!(wrap(&lines[0], 10), vec![lines[0].clone()]);
    }
}
