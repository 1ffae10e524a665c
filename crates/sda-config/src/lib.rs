//! Configuration management and loading for sda.
//!
//! A config file is YAML unless its extension is `.json`. Every section and
//! field is optional; missing values fall back to the exercise defaults.

use anyhow::{Context, bail};
use sda_logging::LoggingConfig;
use sda_trie::{Alphabet, TrieError};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "SDA_CONFIG";

/// Configuration format types supported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension, defaulting to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Main sda configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdaConfig {
    #[serde(default)]
    pub hashtable: HashTableConfig,
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub trie: TrieConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashTableConfig {
    /// Bucket count of the friends table
    #[serde(default = "default_buckets")]
    pub buckets: usize,
}

fn default_buckets() -> usize {
    10
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            buckets: default_buckets(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Capacity of the queue self-check
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    11
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Symbols accepted in trie keys, in child order
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

fn default_alphabet() -> String {
    ('a'..='z').collect()
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
        }
    }
}

impl TrieConfig {
    pub fn alphabet(&self) -> Result<Alphabet, TrieError> {
        Alphabet::new(&self.alphabet)
    }
}

impl SdaConfig {
    /// Rejects values no exercise can run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.hashtable.buckets == 0 {
            bail!("hashtable.buckets must be at least 1");
        }
        if self.queue.capacity == 0 {
            bail!("queue.capacity must be at least 1");
        }
        self.trie.alphabet().context("trie.alphabet is invalid")?;
        Ok(())
    }
}

/// Load configuration from a file
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<SdaConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    let config: SdaConfig = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {}", path.display()))?,
        ConfigFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {}", path.display()))?,
    };
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Save configuration to a file
pub fn save_config<P: AsRef<Path>>(config: &SdaConfig, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).context("failed to serialize JSON config")?
        }
        ConfigFormat::Yaml => {
            serde_yaml::to_string(config).context("failed to serialize YAML config")?
        }
    };

    std::fs::write(path, contents)
        .with_context(|| format!("failed to write config {}", path.display()))?;
    Ok(())
}

/// Resolves the active configuration: an explicit path wins, then the
/// value of [`CONFIG_ENV`], then the defaults.
pub fn resolve_config(
    explicit: Option<&Path>,
    from_env: Option<OsString>,
) -> anyhow::Result<SdaConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|v| !v.is_empty()).map(PathBuf::from));
    match path {
        Some(path) => load_config(path),
        None => Ok(SdaConfig::default()),
    }
}
