//! Interactive quiz loop.
//!
//! Reads one command per line from stdin until `quit` or end of input:
//!
//! ```text
//! s, show    reveal the answer
//! h, hide    hide it again
//! n, next    count this word as done and draw another
//! q, quit    stop
//! <enter>    show when hidden, next when revealed
//! ```

use super::print::{print_answer, print_messages, print_question};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use wordzapp::api::{CmdMessage, WordzApi};
use wordzapp::error::WordzError;
use wordzapp::model::Session;
use wordzapp::quiz::QuizPhase;
use wordzapp::store::backend::StorageBackend;

const HELP: &str = "[s]how  [h]ide  [n]ext  [q]uit  (enter: show, then next)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Show,
    Hide,
    Next,
    Quit,
}

/// `None` for input that isn't a command.
fn parse_action(line: &str, phase: QuizPhase) -> Option<Action> {
    match line.trim().to_lowercase().as_str() {
        "" => Some(match phase {
            QuizPhase::Revealed => Action::Next,
            _ => Action::Show,
        }),
        "s" | "show" => Some(Action::Show),
        "h" | "hide" => Some(Action::Hide),
        "n" | "next" => Some(Action::Next),
        "q" | "quit" | "exit" => Some(Action::Quit),
        _ => None,
    }
}

pub(super) fn run<B: StorageBackend>(api: &mut WordzApi<B>, session: &Session) -> Result<()> {
    let entry = api.start_quiz(session)?;
    println!("{}", HELP.dimmed());
    print_question(&entry, api.quiz().completed());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match parse_action(&line, api.quiz().phase()) {
            Some(Action::Show) => print_answer(&api.reveal_answer()?),
            Some(Action::Hide) => {
                api.hide_answer();
                println!("{}", "(hidden)".dimmed());
            }
            Some(Action::Next) => match api.next_word(session) {
                Ok(entry) => print_question(&entry, api.quiz().completed()),
                Err(WordzError::EmptyList) => {
                    print_messages(&[CmdMessage::warning(WordzError::EmptyList.to_string())]);
                    break;
                }
                // The quiz already advanced in memory; only the count write failed.
                Err(e @ WordzError::Store(_)) => {
                    print_messages(&[CmdMessage::warning(e.to_string())]);
                    if let Some(entry) = api.quiz().current() {
                        print_question(entry, api.quiz().completed());
                    }
                }
                Err(e) => return Err(e.into()),
            },
            Some(Action::Quit) => break,
            None => println!("{}", HELP.dimmed()),
        }
    }

    println!(
        "{}",
        format!("{} words completed.", api.quiz().completed()).dimmed()
    );
    Ok(())
}
