//! Generating a quote or invoice.
//!
//! The flow, in order:
//! 1. Validate the request, including that every total fits.
//! 2. For an invoice, propose the next number (unless one was typed in).
//! 3. Assemble and render the document, and optionally write it to the
//!    output directory.
//! 4. Save the client to the registry (upsert by name).
//! 5. For an invoice, commit the number that is on the document.
//!
//! Steps 1-3 never write to the store, so a failure there leaves the
//! registry and the counter as they were.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuotelyConfig;
use crate::document::{Document, DocumentKind, DocumentRequest};
use crate::error::{QuotelyError, Result};
use crate::numbering;
use crate::registry;
use crate::store::StorageBackend;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

/// A finished document with its printable text and suggested file name.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub document: Document,
    pub rendered: String,
    /// Suggested file name without extension.
    pub filename: String,
}

pub fn run<B: StorageBackend>(
    store: &B,
    config: &QuotelyConfig,
    request: DocumentRequest,
    today: NaiveDate,
    save_to: Option<&Path>,
) -> Result<CmdResult> {
    request.validate()?;

    let proposed = match request.kind() {
        DocumentKind::Invoice => Some(numbering::peek_next(store)?),
        DocumentKind::Quote => None,
    };
    let document = Document::assemble(request, proposed)?;
    let total = document.total()?;
    let rendered = document.render(&config.business_name, &config.currency_symbol)?;
    let filename = document.suggested_filename(today);

    let mut result = CmdResult::default();
    if let Some(dir) = save_to {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(QuotelyError::Io)?;
        }
        let path = dir.join(format!("{}.txt", filename));
        fs::write(&path, &rendered).map_err(QuotelyError::Io)?;
        result.add_message(CmdMessage::success(format!("Saved to {}", path.display())));
        result.paths.push(path);
    }

    registry::upsert(store, document.client.clone())?;
    if let Some(number) = document.number() {
        numbering::commit(store, number)?;
        result.doc_number = Some(number);
    }
    info!(kind = %document.kind(), filename = %filename, "generated document");

    result.add_message(CmdMessage::success(format!(
        "{} created for {} (total {})",
        document.kind(),
        document.client.name,
        total.display_with(&config.currency_symbol)
    )));

    result.document = Some(GeneratedDocument {
        document,
        rendered,
        filename,
    });
    Ok(result)
}
