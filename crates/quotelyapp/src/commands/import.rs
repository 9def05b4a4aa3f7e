use crate::backup::{self, BackupSnapshot};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotelyError, Result};
use crate::numbering;
use crate::store::StorageBackend;
use std::fs;
use std::path::{Path, PathBuf};

/// What a backup file contains, read and checked but not yet applied.
///
/// The UI shows this, asks for confirmation, and only then calls [`run`].
#[derive(Debug, Clone)]
pub struct ImportPreview {
    pub source: PathBuf,
    pub snapshot: BackupSnapshot,
}

impl ImportPreview {
    pub fn customer_count(&self) -> usize {
        self.snapshot.customers.len()
    }

    pub fn has_counter(&self) -> bool {
        self.snapshot.last_invoice_number.is_some()
    }
}

/// Reads and validates a backup file. Never writes.
pub fn preview(path: &Path) -> Result<ImportPreview> {
    let text = fs::read_to_string(path).map_err(QuotelyError::Io)?;
    let snapshot = backup::parse_snapshot(&text)?;
    Ok(ImportPreview {
        source: path.to_path_buf(),
        snapshot,
    })
}

/// Merges a previewed backup. The counter is restored only when asked.
pub fn run<B: StorageBackend>(
    store: &B,
    preview: &ImportPreview,
    restore_counter: bool,
) -> Result<CmdResult> {
    let merged = backup::import_snapshot(store, &preview.snapshot)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully imported {} customers! Total customers now: {}",
        merged.imported, merged.total
    )));

    if restore_counter && backup::restore_counter(store, &preview.snapshot)? {
        let next = numbering::peek_next(store)?;
        result.doc_number = Some(next);
        result.add_message(CmdMessage::success(format!(
            "Invoice counter restored. Next invoice: {}",
            next
        )));
    }

    Ok(result)
}
