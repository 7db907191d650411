//! Interactive mode command

use crate::config::CliConfigLoader;
use crate::interactive::run_interactive;
use anyhow::Result;
use comment_docs_core::Dispatcher;
use tracing::debug;

/// Start interactive mode
pub async fn interactive_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    debug!(
        "Animation: {} (timeout {:?})",
        if config.animation_enabled {
            config.animation_url.as_str()
        } else {
            "disabled"
        },
        config.fetch_timeout
    );

    let dispatcher = Dispatcher::from_config(config)?;
    debug!("Starting on '{}'", dispatcher.initial_page());

    run_interactive(dispatcher).await
}
