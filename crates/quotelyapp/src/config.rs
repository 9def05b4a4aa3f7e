//! # Configuration
//!
//! Quotely configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `QUOTELY_BUSINESS_NAME`, `QUOTELY_CURRENCY_SYMBOL`, ...
//! 2. **Config file**: `quotely.toml` in the data directory.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `business_name` | `My Business` | Heading printed on every document |
//! | `currency_symbol` | `£` | Prefix for money amounts |
//! | `backup_prefix` | `quotely` | Backup files are `<prefix>_backup_<date>.json` |
//! | `output_dir` | data dir | Where saved documents and backups are written |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "quotely.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuotelyConfig {
    /// Heading printed on every document
    #[config(default = "My Business", env = "QUOTELY_BUSINESS_NAME")]
    pub business_name: String,

    /// Prefix for money amounts (e.g. "£", "$")
    #[config(default = "£", env = "QUOTELY_CURRENCY_SYMBOL")]
    pub currency_symbol: String,

    /// Backup files are named `<prefix>_backup_<date>.json`
    #[config(default = "quotely", env = "QUOTELY_BACKUP_PREFIX")]
    pub backup_prefix: String,

    /// Where saved documents and backups go. Defaults to the data directory.
    #[config(env = "QUOTELY_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Default for QuotelyConfig {
    fn default() -> Self {
        Self {
            business_name: "My Business".to_string(),
            currency_symbol: "£".to_string(),
            backup_prefix: "quotely".to_string(),
            output_dir: None,
        }
    }
}

impl QuotelyConfig {
    /// Load from env and `<data_dir>/quotely.toml`. A missing file is fine.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = QuotelyConfig::builder()
            .env()
            .file(data_dir.join(CONFIG_FILENAME))
            .load()?;
        Ok(config)
    }

    pub fn output_dir_or(&self, fallback: &Path) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| fallback.to_path_buf())
    }

    /// Key/value pairs for display, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("business_name", self.business_name.clone()),
            ("currency_symbol", self.currency_symbol.clone()),
            ("backup_prefix", self.backup_prefix.clone()),
            (
                "output_dir",
                self.output_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
        ]
    }
}
