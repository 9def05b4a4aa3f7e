use crate::backup;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotelyError, Result};
use crate::store::StorageBackend;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes `<prefix>_backup_<date>.json` into `out_dir`.
pub fn run<B: StorageBackend>(
    store: &B,
    prefix: &str,
    out_dir: &Path,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let snapshot = backup::export_snapshot(store, now)?;
    let json = backup::to_json(&snapshot)?;

    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(QuotelyError::Io)?;
    }
    let path = out_dir.join(backup::backup_filename(prefix, now.date_naive()));
    fs::write(&path, json).map_err(QuotelyError::Io)?;
    info!(path = %path.display(), customers = snapshot.customers.len(), "exported backup");

    let mut result = CmdResult::default().with_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} customers to {}",
        snapshot.customers.len(),
        path.display()
    )));
    result.add_message(CmdMessage::info(
        "Keep this file safe - you can use it to restore your data if needed.",
    ));
    Ok(result)
}
