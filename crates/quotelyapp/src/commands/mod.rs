//! # Command Layer
//!
//! Every user action maps to exactly one command here. A command is a plain
//! function over a [`StorageBackend`](crate::store::StorageBackend) and ordinary
//! Rust values, returning a structured [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr, or colors
//! - **Prompts**: confirmation happens in the UI, between `preview` and `run`
//!   for commands that need it (see [`import`])
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Testing Strategy
//!
//! Command tests use [`MemBackend`](crate::store::mem_backend::MemBackend) and
//! check both the returned `CmdResult` and what ended up in storage.
//!
//! ## Command Modules
//!
//! - [`customers`]: List, show, save and delete saved customers
//! - [`numbering`]: Show the next invoice number, reset the counter
//! - [`create`]: Generate a quote or invoice
//! - [`export`]: Write a backup file
//! - [`import`]: Preview and merge a backup file
//! - [`config`]: Show effective configuration

use crate::config::QuotelyConfig;
use crate::model::Customer;
use crate::numbering::DocNumber;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod customers;
pub mod export;
pub mod import;
pub mod numbering;

pub use create::GeneratedDocument;

/// Where quotely keeps its data and writes its files.
#[derive(Debug, Clone)]
pub struct QuotelyPaths {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub customers: Vec<Customer>,
    pub document: Option<GeneratedDocument>,
    pub doc_number: Option<DocNumber>,
    pub paths: Vec<PathBuf>,
    pub config: Option<QuotelyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_doc_number(mut self, number: DocNumber) -> Self {
        self.doc_number = Some(number);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: QuotelyConfig) -> Self {
        self.config = Some(config);
        self
    }
}
