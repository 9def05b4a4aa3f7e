//! # Quotely CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/quotelyapp/`: core library (registry, numbering, backups, documents)
//! - `crates/quotely/`: this CLI, a client of the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/quotely/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, prompts, dispatch (commands.rs)          │
//! │  - Terminal output with colors (render.rs)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/quotelyapp/src/api.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Argument parsing is unit tested in `setup.rs`.
//! - Rendering is unit tested in `render.rs` against canned values.
//! - `tests/cli_e2e.rs` drives the real binary against a temp data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
