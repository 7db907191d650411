//! Print a single page without the interactive UI

use crate::config::CliConfigLoader;
use crate::output::{layout, render_plain, LayoutOptions, PlainOptions};
use anyhow::{Context, Result};
use comment_docs_core::{Dispatcher, LayoutPadding, Page};
use std::io::{IsTerminal, Write};
use tracing::debug;

/// Fallback width when stdout is not a terminal
const DEFAULT_WIDTH: usize = 80;

/// Narrowest text width a page is laid out for
const MIN_TEXT_WIDTH: usize = 20;

/// Width left for page text after horizontal padding
fn text_width(terminal_width: usize, padding: &LayoutPadding) -> usize {
    let horizontal = usize::from(padding.left) + usize::from(padding.right);
    terminal_width.saturating_sub(horizontal).max(MIN_TEXT_WIDTH)
}

/// Render `page` and write it to stdout
pub async fn show_command(
    config_loader: CliConfigLoader,
    page: Option<String>,
    expand_all: bool,
    no_color: bool,
) -> Result<()> {
    let config = config_loader.load().await?;
    let dispatcher = Dispatcher::from_config(config)?;

    let page = match page {
        Some(name) => match dispatcher.registry().get_by_label(&name) {
            Some(entry) => entry.page(),
            None => name
                .parse::<Page>()
                .with_context(|| format!("Cannot show '{}'", name))?,
        },
        None => dispatcher.initial_page(),
    };

    let document = dispatcher.dispatch(page).await?;
    debug!("Printing '{}' ({} blocks)", page, document.blocks().len());

    let stdout = std::io::stdout();
    let is_terminal = stdout.is_terminal();
    let padding = dispatcher.config().layout;
    let terminal_width = if is_terminal {
        crossterm::terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(DEFAULT_WIDTH)
    } else {
        DEFAULT_WIDTH
    };

    let options = LayoutOptions {
        width: text_width(terminal_width, &padding),
        expand_all,
    };
    let text = render_plain(
        &layout(&document, &options),
        &PlainOptions {
            color: is_terminal && !no_color,
            left_padding: usize::from(padding.left),
        },
    );

    let mut handle = stdout.lock();
    writeln!(handle, "{}", text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_width_subtracts_padding() {
        assert_eq!(text_width(80, &LayoutPadding::default()), 76);
        assert_eq!(text_width(10, &LayoutPadding::default()), MIN_TEXT_WIDTH);
    }

    #[test]
    fn test_text_width_with_huge_padding() {
        let padding = LayoutPadding {
            top: 0,
            right: u16::MAX,
            bottom: 0,
            left: u16::MAX,
        };
        assert_eq!(text_width(DEFAULT_WIDTH, &padding), MIN_TEXT_WIDTH);
    }
}
