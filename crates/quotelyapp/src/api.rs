//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for quotely operations, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., resolving today's date, the output directory)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the terminal**: No stdout, stderr, or colors
//! - **Prompts**: Two-step operations (import) are split into `preview_*` and
//!   the action itself so the UI can ask in between
//!
//! ## Generic Over StorageBackend
//!
//! `QuotelyApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `QuotelyApi<FsBackend>`
//! - Testing: `QuotelyApi<MemBackend>`

use crate::commands::{self, import::ImportPreview, CmdResult, QuotelyPaths};
use crate::config::QuotelyConfig;
use crate::document::DocumentRequest;
use crate::error::Result;
use crate::model::Customer;
use crate::store::StorageBackend;
use chrono::{Local, Utc};
use std::path::Path;

pub struct QuotelyApi<B: StorageBackend> {
    store: B,
    config: QuotelyConfig,
    paths: QuotelyPaths,
}

impl<B: StorageBackend> QuotelyApi<B> {
    pub fn new(store: B, config: QuotelyConfig, paths: QuotelyPaths) -> Self {
        Self {
            store,
            config,
            paths,
        }
    }

    pub fn store(&self) -> &B {
        &self.store
    }

    pub fn paths(&self) -> &QuotelyPaths {
        &self.paths
    }

    pub fn config(&self) -> &QuotelyConfig {
        &self.config
    }

    pub fn list_customers(&self) -> Result<CmdResult> {
        commands::customers::list(&self.store)
    }

    pub fn show_customer(&self, name: &str) -> Result<CmdResult> {
        commands::customers::show(&self.store, name)
    }

    pub fn save_customer(&self, customer: Customer) -> Result<CmdResult> {
        commands::customers::save(&self.store, customer)
    }

    pub fn delete_customer(&self, name: &str) -> Result<CmdResult> {
        commands::customers::delete(&self.store, name)
    }

    pub fn next_number(&self) -> Result<CmdResult> {
        commands::numbering::next(&self.store)
    }

    pub fn reset_counter(&self) -> Result<CmdResult> {
        commands::numbering::reset(&self.store)
    }

    /// Generates a document dated by the request, named by today's date.
    /// When `save` is set the text is written to the output directory.
    pub fn create_document(&self, request: DocumentRequest, save: bool) -> Result<CmdResult> {
        let today = Local::now().date_naive();
        let save_to = save.then_some(self.paths.output_dir.as_path());
        commands::create::run(&self.store, &self.config, request, today, save_to)
    }

    /// Writes a backup into `dir`, or the output directory when `None`.
    pub fn export_backup(&self, dir: Option<&Path>) -> Result<CmdResult> {
        let dir = dir.unwrap_or(self.paths.output_dir.as_path());
        commands::export::run(&self.store, &self.config.backup_prefix, dir, Utc::now())
    }

    pub fn preview_import(&self, path: &Path) -> Result<ImportPreview> {
        commands::import::preview(path)
    }

    pub fn import_backup(&self, preview: &ImportPreview, restore_counter: bool) -> Result<CmdResult> {
        commands::import::run(&self.store, preview, restore_counter)
    }

    pub fn show_config(&self) -> Result<CmdResult> {
        commands::config::run(&self.paths, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentDetails, LineItem, LineItems};
    use crate::store::mem_backend::MemBackend;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn api(output_dir: PathBuf) -> QuotelyApi<MemBackend> {
        QuotelyApi::new(
            MemBackend::new(),
            QuotelyConfig::default(),
            QuotelyPaths {
                data_dir: output_dir.clone(),
                output_dir,
            },
        )
    }

    fn invoice_request(client: &str) -> DocumentRequest {
        DocumentRequest {
            client: Customer::new(client, None, None),
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            notes: None,
            details: DocumentDetails::Invoice {
                number: None,
                items: LineItems::new("Work|1|100".parse::<LineItem>().unwrap()),
            },
        }
    }

    #[test]
    fn invoices_take_consecutive_numbers() {
        let api = api(PathBuf::from("/unused"));
        let first = api.create_document(invoice_request("A"), false).unwrap();
        let second = api.create_document(invoice_request("B"), false).unwrap();
        assert_eq!(first.doc_number.unwrap().to_string(), "0001");
        assert_eq!(second.doc_number.unwrap().to_string(), "0002");
        assert_eq!(api.list_customers().unwrap().customers.len(), 2);
    }

    #[test]
    fn export_then_import_into_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let source = api(dir.path().to_path_buf());
        source.create_document(invoice_request("Acme"), false).unwrap();
        let exported = source.export_backup(None).unwrap();

        let target = api(dir.path().to_path_buf());
        let preview = target.preview_import(&exported.paths[0]).unwrap();
        assert_eq!(preview.customer_count(), 1);
        target.import_backup(&preview, true).unwrap();

        assert_eq!(target.next_number().unwrap().doc_number.unwrap().to_string(), "0002");
        assert_eq!(target.show_customer("ACME").unwrap().customers.len(), 1);
    }

    #[test]
    fn reset_then_next_is_0001() {
        let api = api(PathBuf::from("/unused"));
        api.create_document(invoice_request("A"), false).unwrap();
        api.reset_counter().unwrap();
        assert_eq!(api.next_number().unwrap().doc_number.unwrap().to_string(), "0001");
    }
}
