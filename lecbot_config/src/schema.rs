use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lecbot_core::{
    DEFAULT_DOWNLOAD_PREFIX, DEFAULT_MAX_LECTURE, DirectoryStore, FileStore, KeywordTables,
    Resolver, ResolverOptions,
};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: Self::default_bind(),
        }
    }
}

impl ServerConfig {
    fn default_bind() -> String {
        "0.0.0.0:8000".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding the lecture files, relative to the working directory.
    #[serde(default = "CatalogConfig::default_files_dir")]
    pub files_dir: PathBuf,
    #[serde(default = "CatalogConfig::default_download_prefix")]
    pub download_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            files_dir: Self::default_files_dir(),
            download_prefix: Self::default_download_prefix(),
        }
    }
}

impl CatalogConfig {
    fn default_files_dir() -> PathBuf {
        PathBuf::from("data").join("files")
    }

    fn default_download_prefix() -> String {
        DEFAULT_DOWNLOAD_PREFIX.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MatchingConfig {
    #[serde(default = "MatchingConfig::default_max_lecture")]
    pub max_lecture: u32,
    /// JSON keyword tables replacing the built-in subject and ordinal lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables_path: Option<PathBuf>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_lecture: Self::default_max_lecture(),
            tables_path: None,
        }
    }
}

impl MatchingConfig {
    const fn default_max_lecture() -> u32 {
        DEFAULT_MAX_LECTURE
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("lecbot"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'lecbot init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Keyword tables from `matching.tables_path`, or the built-in ones.
    pub fn keyword_tables(&self) -> anyhow::Result<KeywordTables> {
        let Some(path) = &self.matching.tables_path else {
            return Ok(KeywordTables::default());
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read tables {}: {e}", path.display()))?;
        let tables = KeywordTables::from_json(&content)?;
        tracing::info!(
            "Loaded {} subjects and {} ordinals from {}",
            tables.subjects.len(),
            tables.ordinals.len(),
            path.display()
        );
        Ok(tables)
    }

    #[must_use]
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            max_lecture: self.matching.max_lecture,
            download_prefix: self.catalog.download_prefix.clone(),
        }
    }

    /// Resolver over `catalog.files_dir` with the configured tables and options.
    pub fn build_resolver(&self) -> anyhow::Result<Resolver<Arc<dyn FileStore>>> {
        let tables = self.keyword_tables()?;

        let files_dir = &self.catalog.files_dir;
        if files_dir.is_dir() {
            tracing::info!("Lecture directory: {}", files_dir.display());
        } else {
            tracing::warn!(
                "Lecture directory {} does not exist yet, every lookup will miss",
                files_dir.display()
            );
        }

        let store: Arc<dyn FileStore> = Arc::new(DirectoryStore::new(files_dir));
        Ok(Resolver::new(
            Arc::new(tables),
            store,
            self.resolver_options(),
        )?)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, Self::template())?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Put lecture files named like math_lecture_2.pdf in catalog.files_dir");
        println!("   2. Run 'lecbot serve' to start the HTTP server");
        println!("   3. Or try a message with 'lecbot ask -m \"algorithm lecture 1\"'");
        println!();
        println!("🔧 Configuration options:");
        println!("   - server.bind: address the HTTP server listens on");
        println!("   - catalog.download_prefix: URL prefix of download links");
        println!("   - matching.max_lecture: largest lecture number accepted");
        println!("   - matching.tables_path: JSON file replacing the built-in keyword tables");
        println!();
        Ok(())
    }

    const fn template() -> &'static str {
        r#"{
  "server": {
    "bind": "0.0.0.0:8000"
  },
  "catalog": {
    "files_dir": "data/files",
    "download_prefix": "/file"
  },
  "matching": {
    "max_lecture": 50
  }
}"#
    }
}
