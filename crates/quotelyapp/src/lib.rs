//! # Quotely Architecture
//!
//! Quotely produces quotes and sequentially numbered invoices, remembers the
//! customers it has billed, and can back that address book up to a JSON file
//! and merge it back in. The library is UI-agnostic; the `quotely` binary is
//! one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (quotely crate)                                  │
//! │  - Parses arguments, prompts, prints, exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves dates and directories                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business flows, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain + Storage                                           │
//! │  - registry, numbering, backup, document, money             │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal I/O in Core
//!
//! Everything in this crate takes plain Rust values and returns
//! `Result<...>`. Nothing here prints or exits. Diagnostics go through
//! `tracing`; the binary decides whether and where they show up.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every UI talks to
//! - [`commands`]: One module per user action
//! - [`registry`]: The saved-customer list (case-insensitive names, sorted)
//! - [`numbering`]: The invoice counter (peek, commit, reset)
//! - [`backup`]: Export and import-merge of the address book
//! - [`document`]: Quote and invoice assembly, totals, rendering
//! - [`money`]: Decimal money amounts
//! - [`model`]: The `Customer` record
//! - [`store`]: Key-value storage abstraction
//! - [`config`]: Settings from `quotely.toml` and the environment
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod backup;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod init;
pub mod model;
pub mod money;
pub mod numbering;
pub mod registry;
pub mod store;
