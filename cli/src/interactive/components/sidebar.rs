//! Sidebar with the page selection control

use super::content::{span_contents, TextStyle};
use comment_docs_core::markdown;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct SidebarProps {
    /// Markdown heading above the menu
    pub title: String,
    /// Caption for the selection control
    pub prompt: String,
    /// Line pinned to the bottom of the sidebar
    pub footer: String,
    /// Menu labels in registration order
    pub labels: Vec<String>,
    /// Index of the selected label
    pub selected: usize,
    /// Width in cells including the border
    pub width: u16,
}

/// Radio marker for a menu entry
pub fn marker(selected: bool) -> &'static str {
    if selected {
        "◉"
    } else {
        "○"
    }
}

#[component]
pub fn Sidebar(props: &SidebarProps) -> impl Into<AnyElement<'static>> {
    let title_style = TextStyle {
        bold: true,
        ..TextStyle::default()
    };

    element! {
        View(
            width: u32::from(props.width),
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: Color::Rgb { r: 100, g: 149, b: 237 },
            padding_left: 1,
            padding_right: 1,
        ) {
            MixedText(contents: span_contents(&markdown::inline(&props.title), title_style))

            View(margin_top: 1, margin_bottom: 1) {
                Text(content: &props.prompt, color: Color::DarkGrey)
            }

            #(props.labels.iter().enumerate().map(|(index, label)| {
                let selected = index == props.selected;
                element! {
                    View(key: index) {
                        Text(
                            content: format!("{} {}", marker(selected), label),
                            color: if selected { Color::Cyan } else { Color::White },
                            weight: if selected { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }
            }))

            View(flex_grow: 1.0)

            Text(
                content: "─".repeat(props.width.saturating_sub(4) as usize),
                color: Color::DarkGrey,
            )
            MixedText(contents: span_contents(&markdown::inline(&props.footer), TextStyle {
                color: Some(Color::DarkGrey),
                ..TextStyle::default()
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker() {
        assert_eq!(marker(true), "◉");
        assert_eq!(marker(false), "○");
    }
}
