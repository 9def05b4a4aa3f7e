//! # CLI Behavior
//!
//! This is **one possible UI client** for quotely, not the application itself.
//! The CLI is the only place that knows about terminal I/O, prompts and exit codes.
//!
//! ## Creating Documents
//!
//! `quotely create` builds an invoice by default; `--quote` switches to a quote.
//!
//! - Invoices take one `--item "description|quantity|price"` per row and get the
//!   next number unless `--number` is given.
//! - Quotes take `--description` and `--total`.
//! - If the client is already saved, missing `--email` / `--address` are filled
//!   in from the saved entry.
//!
//! The rendered document is printed. `--save` also writes it to the output directory.
//!
//! ## Confirmations
//!
//! `reset` and `import` ask on stdin before changing anything. `--yes` skips the
//! question. Anything other than `y`/`yes` declines and nothing is written.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (messages, customer table, documents)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
