//! # Storage Layer
//!
//! Quotely keeps all of its state in a tiny string-keyed store, the same shape a
//! browser's local storage offers. The [`StorageBackend`] trait is the only
//! capability the rest of the library needs: `get`, `set` and `remove`.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with [`mem_backend::MemBackend`] (no filesystem needed)
//! - Keep registry and numbering logic as plain functions over a store handle
//! - Allow other hosts (a browser via wasm, a sync service) without touching core logic
//!
//! ## Keys
//!
//! | Key | Value | Owner |
//! |-----|-------|-------|
//! | [`CUSTOMERS_KEY`] | JSON array of customers | [`crate::registry`] |
//! | [`INVOICE_COUNTER_KEY`] | decimal string | [`crate::numbering`] |
//!
//! ## Failure Semantics
//!
//! Backends only report host-level failures (permissions, disk). A missing key is
//! `Ok(None)`. Values that exist but cannot be understood are the caller's
//! problem, and the callers default them (empty registry, counter of zero).
//!
//! ## Storage Layout
//!
//! For [`fs_backend::FsBackend`]:
//! ```text
//! <data dir>/
//! ├── storage.json        # { "customers": "[...]", "lastInvoiceNumber": "7" }
//! └── quotely.toml        # Optional configuration
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

/// Key holding the customer registry.
pub const CUSTOMERS_KEY: &str = "customers";

/// Key holding the last committed invoice number.
pub const INVOICE_COUNTER_KEY: &str = "lastInvoiceNumber";
