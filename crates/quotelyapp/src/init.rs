//! # Data Directory and Context Setup
//!
//! Quotely keeps everything (the key-value store, `quotely.toml`, and by default
//! saved documents and backups) in a single data directory.
//!
//! ## Resolution Order
//!
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. The `QUOTELY_DATA` environment variable. Tests use this to isolate state.
//! 3. The OS data directory via [`directories::ProjectDirs`].
//!
//! The directory is created on first use.

use crate::api::QuotelyApi;
use crate::commands::QuotelyPaths;
use crate::config::QuotelyConfig;
use crate::error::{QuotelyError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_DIR_ENV: &str = "QUOTELY_DATA";

pub struct QuotelyContext {
    pub api: QuotelyApi<FsBackend>,
}

/// Picks the data directory without touching the filesystem.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "quotely", "quotely")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QuotelyError::Config("Could not determine a data directory".into()))
}

/// Resolves the data directory, loads config and opens the store.
pub fn initialize(data_override: Option<PathBuf>) -> Result<QuotelyContext> {
    let data_dir = resolve_data_dir(data_override)?;
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }

    let config = QuotelyConfig::load(&data_dir)?;
    let output_dir = config.output_dir_or(&data_dir);
    debug!(data_dir = %data_dir.display(), output_dir = %output_dir.display(), "initialized");

    let store = FsBackend::new(data_dir.clone());
    let paths = QuotelyPaths {
        data_dir,
        output_dir,
    };
    Ok(QuotelyContext {
        api: QuotelyApi::new(store, config, paths),
    })
}
