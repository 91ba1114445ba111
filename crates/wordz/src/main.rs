//! # Wordz CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/wordzapp/`: core library, UI-agnostic business logic
//! - `crates/wordz/`: this CLI, a client of `wordzapp`
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/wordz/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch, prompts and the quiz loop (commands.rs, quiz)  │
//! │  - Colored terminal output (print.rs)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/wordzapp/src/api.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward returns plain Rust values. Argument
//! parsing, confirmation prompts, writing export files, rendering and exit
//! codes all happen here.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
