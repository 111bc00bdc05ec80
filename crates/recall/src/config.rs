use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use recall_core::history::{default_seed, MAX_HISTORY_ITEMS};
use recall_core::suggest::SUGGESTION_LIMIT;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    #[serde(default = "default_seed")]
    pub seed: Vec<String>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            suggestion_limit: default_suggestion_limit(),
            seed: default_seed(),
        }
    }
}

fn default_max_items() -> usize {
    MAX_HISTORY_ITEMS
}

fn default_suggestion_limit() -> usize {
    SUGGESTION_LIMIT
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate history limits
    if config.history.max_items == 0 {
        anyhow::bail!("history.max_items must be >= 1");
    }

    if config.history.suggestion_limit == 0 {
        anyhow::bail!("history.suggestion_limit must be >= 1");
    }

    if config.history.suggestion_limit > config.history.max_items {
        anyhow::bail!(
            "history.suggestion_limit ({}) must be <= history.max_items ({})",
            config.history.suggestion_limit,
            config.history.max_items
        );
    }

    // Validate seed list
    if config.history.seed.len() > config.history.max_items {
        anyhow::bail!(
            "history.seed has {} entries but history.max_items is {}",
            config.history.seed.len(),
            config.history.max_items
        );
    }

    if config.history.seed.iter().any(|s| s.trim().is_empty()) {
        anyhow::bail!("history.seed entries must be non-empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("recall.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let (_tmp, path) = write_config("[db]\npath = \"data/recall.sqlite\"\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.history.max_items, 10);
        assert_eq!(config.history.suggestion_limit, 5);
        assert_eq!(config.history.seed.len(), 5);
    }

    #[test]
    fn test_rejects_zero_max_items() {
        let (_tmp, path) = write_config(
            "[db]\npath = \"data/recall.sqlite\"\n\n[history]\nmax_items = 0\n",
        );
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_rejects_limit_above_cap() {
        let (_tmp, path) = write_config(
            "[db]\npath = \"data/recall.sqlite\"\n\n[history]\nmax_items = 3\nsuggestion_limit = 4\n",
        );
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_rejects_blank_seed_entry() {
        let (_tmp, path) = write_config(
            "[db]\npath = \"data/recall.sqlite\"\n\n[history]\nseed = [\"ok\", \"  \"]\n",
        );
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_custom_seed_is_accepted() {
        let (_tmp, path) = write_config(
            "[db]\npath = \"data/recall.sqlite\"\n\n[history]\nseed = [\"alpha\", \"beta\"]\n",
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.history.seed, vec!["alpha", "beta"]);
    }
}
