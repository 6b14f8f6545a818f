//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use lecbot_config::Config;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod ask;
mod init;
mod serve;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Load the config from `path`, the default location, or fall back to defaults.
fn load_config(path: Option<&Path>, files_dir: Option<PathBuf>) -> anyhow::Result<Config> {
    let default_path = Config::config_path().ok();
    load_config_with(path, default_path.as_deref(), files_dir)
}

/// Built-in defaults apply only when no config file exists at all; a file
/// that exists but cannot be read or parsed is an error.
fn load_config_with(
    path: Option<&Path>,
    default_path: Option<&Path>,
    files_dir: Option<PathBuf>,
) -> anyhow::Result<Config> {
    let mut config = match (path, default_path) {
        (Some(path), _) => Config::load_from(path)?,
        (None, Some(default_path)) if default_path.exists() => {
            let config = Config::load_from(default_path)?;
            info!("Loaded config from {}", default_path.display());
            config
        }
        _ => {
            warn!("No config file found, run 'lecbot init' to create one");
            warn!("Using built-in defaults");
            Config::default()
        }
    };

    if let Some(dir) = files_dir {
        config.catalog.files_dir = dir;
    }

    Ok(config)
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_uses_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("lecbot").join("config.json");

        let config = load_config_with(None, Some(&missing), None)?;
        assert_eq!(config, Config::default());

        let config = load_config_with(None, None, None)?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_malformed_default_config_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"catalog":{"files_dir":"/srv/lectures"}, BROKEN"#)?;

        assert!(load_config_with(None, Some(&path), None).is_err());
        Ok(())
    }

    #[test]
    fn test_default_config_file_is_loaded() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"catalog":{"files_dir":"/srv/lectures"}}"#)?;

        let config = load_config_with(None, Some(&path), None)?;
        assert_eq!(config.catalog.files_dir, PathBuf::from("/srv/lectures"));
        Ok(())
    }

    #[test]
    fn test_explicit_path_and_files_dir_override() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let explicit = dir.path().join("explicit.json");
        let default = dir.path().join("default.json");
        std::fs::write(&explicit, r#"{"server":{"bind":"127.0.0.1:9000"}}"#)?;
        std::fs::write(&default, "{ broken")?;

        let config = load_config_with(
            Some(&explicit),
            Some(&default),
            Some(PathBuf::from("lectures")),
        )?;
        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.catalog.files_dir, PathBuf::from("lectures"));

        assert!(load_config_with(Some(&dir.path().join("nope.json")), None, None).is_err());
        Ok(())
    }
}
