//! # comment-docs CLI
//!
//! Terminal viewer for the Comment Analyzer documentation.
//!
//! ## Usage
//!
//! - `comment-docs` - Browse the pages interactively
//! - `comment-docs show backend` - Print one page and exit
//! - `comment-docs pages` - List the available pages

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod output;

use commands::{interactive_command, pages_command, show_command};
use config::CliConfigLoader;

/// comment-docs - Comment Analyzer documentation in the terminal
#[derive(Parser)]
#[command(name = "comment-docs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the Comment Analyzer documentation in the terminal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Animation URL override
    #[arg(long)]
    animation_url: Option<String>,

    /// Animation request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Skip the home page animation
    #[arg(long)]
    no_animation: bool,

    /// Page selected on start
    #[arg(long)]
    page: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a page and exit
    Show {
        /// Page label or slug (defaults to the start page)
        page: Option<String>,

        /// Open every expander
        #[arg(long)]
        expand_all: bool,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// List available pages
    Pages,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(url) = &cli.animation_url {
        loader = loader.with_animation_url_override(url.clone());
    }

    if let Some(timeout) = cli.timeout {
        loader = loader.with_timeout_override(timeout);
    }

    if let Some(page) = &cli.page {
        loader = loader.with_page_override(page.clone());
    }

    if cli.no_animation {
        loader = loader.without_animation();
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; the full-screen UI only gets them when asked for
    if cli.verbose || cli.command.is_some() {
        comment_docs_core::init_tracing_with_debug(cli.verbose);
    }

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Show {
            page,
            expand_all,
            no_color,
        }) => show_command(config_loader, page, expand_all, no_color).await,
        Some(Commands::Pages) => pages_command(config_loader).await,
        // Default to interactive mode
        None => interactive_command(config_loader).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([
            "comment-docs",
            "--no-animation",
            "--timeout",
            "3",
            "show",
            "ml",
            "--expand-all",
        ])
        .unwrap();
        assert!(cli.no_animation);
        assert_eq!(cli.timeout, Some(3));
        match cli.command {
            Some(Commands::Show {
                page, expand_all, ..
            }) => {
                assert_eq!(page.as_deref(), Some("ml"));
                assert!(expand_all);
            }
            _ => panic!("expected show"),
        }
    }
}
