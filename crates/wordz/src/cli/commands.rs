//! # CLI Layer
//!
//! The **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Writes export files and reads import files
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap, see [`super::setup`]
//! 2. **Logging**: `tracing` to stderr, `-v` for debug output
//! 3. **Context Setup**: data directory, config and API via `initialize`
//! 4. **Dispatch**: one handler per subcommand
//! 5. **Output**: colored text, or JSON with `--json`

use super::print::{print_messages, print_stats, print_word, print_words};
use super::quiz;
use super::setup::{Cli, Commands, QuizCommands};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use wordzapp::api::{ImportMode, WordFilter, WordzApi};
use wordzapp::init::{initialize, WordzContext};
use wordzapp::model::{SortMode, WordChanges, WordDraft};
use wordzapp::store::fs_backend::FsBackend;

type Api = WordzApi<FsBackend>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data.clone())?;
    debug!("Data directory: {}", ctx.data_dir.display());
    let json = cli.json;

    match cli.command {
        None => handle_list(&ctx.api, None, None, json),
        Some(command) => dispatch(command, &mut ctx, json),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wordz=debug,wordzapp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(command: Commands, ctx: &mut WordzContext, json: bool) -> Result<()> {
    let api = &mut ctx.api;
    match command {
        Commands::Register { username, password } => {
            let password = require_password(password)?;
            let result = api.register(&username, &password)?;
            print_messages(&result.messages);
        }
        Commands::Login { username, password } => {
            let password = require_password(password)?;
            let session = api.login(&username, &password)?;
            println!("{}", format!("Logged in as {}", session.username()).green());
        }
        Commands::Logout => {
            api.logout()?;
            println!("{}", "Logged out.".dimmed());
        }
        Commands::Whoami => handle_whoami(api, json)?,
        Commands::Add {
            word,
            meaning,
            translation,
            example,
        } => {
            let session = api.require_session()?;
            let draft = WordDraft::new(word, meaning)
                .with_translation(translation.unwrap_or_default())
                .with_example(example.unwrap_or_default());
            let result = api.add_word(&session, draft)?;
            if json {
                print_json(&result.affected_words)?;
            } else {
                print_messages(&result.messages);
            }
        }
        Commands::List { search, sort } => handle_list(api, search, sort, json)?,
        Commands::Search { term } => handle_list(api, Some(term), None, json)?,
        Commands::Edit {
            selector,
            word,
            meaning,
            translation,
            example,
        } => {
            let changes = WordChanges {
                word,
                meaning,
                translation,
                example,
            };
            if changes.is_empty() {
                return Err(anyhow!(
                    "Nothing to change. Pass --word, --meaning, --translation or --example."
                ));
            }
            let session = api.require_session()?;
            let result = api.edit_word(&session, &selector, changes)?;
            if json {
                print_json(&result.affected_words)?;
            } else {
                print_messages(&result.messages);
                for entry in &result.affected_words {
                    print_word(entry);
                }
            }
        }
        Commands::Delete { selector, yes } => {
            let session = api.require_session()?;
            let entry = api.get_word(&session, &selector)?;
            if !yes && !confirm(&format!("Delete \"{}\"?", entry.word))? {
                println!("{}", "Delete cancelled.".dimmed());
                return Ok(());
            }
            let result = api.delete_word_by_id(&session, &entry.id)?;
            print_messages(&result.messages);
        }
        Commands::Count => {
            let session = api.require_session()?;
            let count = api.count_words(&session)?;
            if json {
                print_json(&serde_json::json!({ "count": count }))?;
            } else {
                println!("{}", count);
            }
        }
        Commands::Quiz { action } => handle_quiz(api, action, json)?,
        Commands::Export { user, all, dir } => handle_export(api, user, all, dir)?,
        Commands::Import { file, replace } => {
            let session = api.require_session()?;
            let contents = std::fs::read(&file)
                .with_context(|| format!("Could not read {}", file.display()))?;
            let mode = if replace {
                ImportMode::Replace
            } else {
                ImportMode::Merge
            };
            let result = api.import_words(&session, &contents, mode)?;
            print_messages(&result.messages);
        }
        Commands::Config => {
            if json {
                print_json(ctx.config())?;
            } else {
                println!("# data directory: {}", ctx.data_dir.display());
                print!("{}", toml::to_string(ctx.config())?);
            }
        }
    }
    Ok(())
}

fn handle_whoami(api: &Api, json: bool) -> Result<()> {
    let Some(user) = api.current_user() else {
        println!("{}", "Not logged in.".dimmed());
        return Ok(());
    };
    if json {
        print_json(&serde_json::json!({
            "username": user.username,
            "createdAt": user.created_at,
            "words": user.words.len(),
        }))?;
    } else {
        println!(
            "{} {}",
            user.username.bold(),
            format!(
                "(since {}, {} words)",
                user.created_at.format("%Y-%m-%d"),
                user.words.len()
            )
            .dimmed()
        );
    }
    Ok(())
}

fn handle_list(
    api: &Api,
    search: Option<String>,
    sort: Option<SortMode>,
    json: bool,
) -> Result<()> {
    let session = api.require_session()?;
    let sort = sort.unwrap_or(api.config().default_sort);
    let result = api.list_words(&session, WordFilter::new(search, sort))?;
    if json {
        return print_json(&result.listed_words);
    }
    let stored = api.all_words(&session)?;
    print_words(&result.listed_words, &stored);
    print_messages(&result.messages);
    Ok(())
}

fn handle_quiz(api: &mut Api, action: Option<QuizCommands>, json: bool) -> Result<()> {
    let session = api.require_session()?;
    match action {
        None => quiz::run(api, &session),
        Some(QuizCommands::Stats) => {
            let stats = api.quiz_stats(&session)?;
            if json {
                print_json(&stats)
            } else {
                print_stats(&stats);
                Ok(())
            }
        }
        Some(QuizCommands::Reset { yes }) => {
            let confirmed = yes || confirm("Reset quiz progress?")?;
            let result = api.reset_quiz(confirmed)?;
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_export(api: &Api, user: bool, all: bool, dir: Option<PathBuf>) -> Result<()> {
    let doc = if all {
        api.export_all_users()?
    } else {
        let session = api.require_session()?;
        if user {
            api.export_user(&session)?
        } else {
            api.export_words(&session)?
        }
    };

    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    let path = dir.join(&doc.filename);
    std::fs::write(&path, &doc.contents)
        .with_context(|| format!("Could not write {}", path.display()))?;
    println!("{}", format!("Exported to {}", path.display()).green());
    Ok(())
}

fn require_password(password: Option<String>) -> Result<String> {
    password.ok_or_else(|| anyhow!("Password required. Pass --password or set WORDZ_PASSWORD."))
}

/// Ask on stdout, read one line from stdin. Anything but y/yes is a no,
/// including end of input.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
