//! One-off resolution of chat messages from the command line.

use lecbot_core::{FileStore, Resolver};
use std::io::Write;
use std::path::PathBuf;

use super::load_config;

/// Input for the ask command.
#[derive(Debug, Clone, Default)]
pub struct AskInput {
    /// Single message to resolve; reads lines from stdin when absent
    pub message: Option<String>,
    /// Optional lecture directory (overrides config)
    pub files_dir: Option<PathBuf>,
    /// Optional config file path
    pub config: Option<PathBuf>,
    /// Also print what was extracted from the message
    pub explain: bool,
}

/// Strategy for resolving messages without starting the server.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = load_config(input.config.as_deref(), input.files_dir)?;
        let resolver = config.build_resolver()?;

        if let Some(message) = input.message {
            return answer(&resolver, &message, input.explain);
        }

        println!("lecbot ready. Type 'exit' to quit.\n");
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();

            if line == "exit" {
                break;
            }
            if line.is_empty() {
                continue;
            }

            answer(&resolver, line, input.explain)?;
            println!();
        }

        Ok(())
    }
}

fn answer<S: FileStore>(
    resolver: &Resolver<S>,
    message: &str,
    explain: bool,
) -> anyhow::Result<()> {
    if explain {
        let extraction = resolver.extract(message);
        println!("{}", serde_json::to_string_pretty(&extraction)?);
    }
    let payload = resolver.resolve(message);
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
