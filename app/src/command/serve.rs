use lecbot_server::Server;
use std::path::PathBuf;
use tracing::info;

use super::load_config;

/// Input for the serve command.
#[derive(Debug, Clone, Default)]
pub struct ServeInput {
    /// Optional listen address (overrides config)
    pub bind: Option<String>,
    /// Optional lecture directory (overrides config)
    pub files_dir: Option<PathBuf>,
    /// Optional config file path
    pub config: Option<PathBuf>,
}

/// Strategy for running the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = load_config(input.config.as_deref(), input.files_dir)?;
        if let Some(bind) = input.bind {
            config.server.bind = bind;
        }

        let server = Server::from_config(&config)?;

        info!("Starting lecbot server on {}. Press Ctrl+C to stop.", server.bind());
        server.run().await?;

        Ok(())
    }
}
