//! Configuration for the `dsa` command line tools.
//!
//! Load order: `dsa.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DsaConfig {
    pub run: RunConfig,
    pub wordnet: WordNetConfig,
    pub export: ExportConfig,
    pub storage: StorageConfig,
}

/// Runtime knobs shared by the randomized commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for the shuffle RNG. Absent means a fresh RNG per run;
    /// zero is a valid seed.
    pub seed: Option<u64>,
}

/// Default input files for the wordnet commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordNetConfig {
    /// Synsets CSV used when `--synsets` is not passed.
    pub synsets: Option<PathBuf>,
    /// Hypernyms CSV used when `--hypernyms` is not passed.
    pub hypernyms: Option<PathBuf>,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output format used when `--format` is not passed: "dot" or "mermaid".
    pub format: String,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Compress saved graphs with zstd (`.json.zst`).
    pub compress: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "dot".to_string(),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

/// Like [`env_override`], for fields where absence is meaningful.
fn env_override_opt<T: std::str::FromStr>(var: &str, target: &mut Option<T>) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = Some(n);
    }
}

impl DsaConfig {
    /// Load config from `dsa.toml` in the given directory, with env var
    /// overrides. Falls back to defaults if no config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join("dsa.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        // Environment variable overrides
        env_override_opt("DSA_SEED", &mut config.run.seed);
        env_override_opt("DSA_SYNSETS", &mut config.wordnet.synsets);
        env_override_opt("DSA_HYPERNYMS", &mut config.wordnet.hypernyms);
        env_override("DSA_EXPORT_FORMAT", &mut config.export.format);
        env_override("DSA_STORAGE_COMPRESS", &mut config.storage.compress);

        if !matches!(config.export.format.as_str(), "dot" | "mermaid") {
            anyhow::bail!(
                "unknown export format {:?}: use \"dot\" or \"mermaid\"",
                config.export.format,
            );
        }

        Ok(config)
    }
}
