//! # Wordz Architecture
//!
//! Wordz is a **UI-agnostic vocabulary flashcard library**: users keep
//! their own word lists, browse them with search and sort, quiz themselves
//! on random words, and move lists in and out as JSON. The `wordz` binary
//! is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (wordz crate)                                          │
//! │  - Parses arguments, prompts, formats output, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the quiz state           │
//! │  - Resolves word selectors to ids                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, quiz.rs)                     │
//! │  - Validation, list invariants, import/export, migration    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! │  - VocabStore: typed access to the fixed keys               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr, never
//! prompts and never exits. Destructive operations take a `confirmed` flag
//! and exports return bytes plus a suggested filename.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `MemBackend`, with seeded RNGs for
//!    the quiz. This is where most tests live.
//! 2. **API**: dispatch and selector resolution.
//! 3. **Integration** (`tests/`): full workflows over `FsBackend` in a
//!    temp directory.
//! 4. **CLI**: end-to-end runs of the binary.

pub mod api;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod init;
pub mod model;
pub mod quiz;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
