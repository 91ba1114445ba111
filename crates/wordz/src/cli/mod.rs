//! # CLI Behavior
//!
//! This is **one possible UI client** for wordz, not the application itself.
//!
//! ## Naked Execution
//!
//! Running `wordz` with no arguments lists the saved words, the page people
//! open most.
//!
//! ## Sessions
//!
//! `wordz login` persists the logged-in user in the data directory, so
//! later commands act for that user until `wordz logout`.
//!
//! ## Word Selectors
//!
//! `edit` and `delete` take a selector: the 1-based position shown by a
//! plain `wordz list`, an entry id, or the word itself.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: per-command handlers that call the API and print results
//! - `quiz`: the interactive quiz loop
//! - `print`: colored output for messages, word lists and answers

mod commands;
mod print;
mod quiz;
pub mod setup;

pub use commands::run;
