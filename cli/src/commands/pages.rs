//! Page listing command

use crate::config::CliConfigLoader;
use anyhow::Result;
use comment_docs_core::PageRegistry;
use tracing::info;

/// One row of the listing
pub fn page_line(label: &str, slug: &str, is_default: bool) -> String {
    let marker = if is_default { "▸" } else { " " };
    format!("{} {:<18} {}", marker, label, slug)
}

/// Show the registered pages in menu order
pub async fn pages_command(config_loader: CliConfigLoader) -> Result<()> {
    info!("Listing available pages");

    let config = config_loader.load().await?;
    let registry = PageRegistry::standard();
    let default = if registry.contains(config.default_page) {
        Some(config.default_page)
    } else {
        registry.first()
    };

    println!("{} {}\n", config.site.page_icon, config.site.page_title);
    for entry in registry.entries() {
        println!(
            "{}",
            page_line(entry.label(), entry.page().slug(), Some(entry.page()) == default)
        );
    }
    println!("\n💡 Use `comment-docs show <page>` to print a page.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_line() {
        assert_eq!(
            page_line("Machine Learning", "machine-learning", false),
            "  Machine Learning   machine-learning"
        );
        assert_eq!(page_line("Home", "home", true), "▸ Home               home");
    }
}
