use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wordzapp::api::{CmdMessage, MessageLevel, QuizStats, WordEntry};
use wordzapp::quiz::QuizAnswer;

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per entry: its position in the stored list (what `edit` and
/// `delete` accept), word, meaning, then how long ago it was added.
pub(super) fn print_words(listed: &[WordEntry], stored: &[WordEntry]) {
    for line in word_lines(listed, stored) {
        println!("{}", line);
    }
}

fn word_lines(listed: &[WordEntry], stored: &[WordEntry]) -> Vec<String> {
    let idx_width = stored.len().max(1).to_string().len() + 2;
    listed
        .iter()
        .map(|entry| {
            let position = stored
                .iter()
                .position(|w| w.id == entry.id)
                .map(|i| format!("{}.", i + 1))
                .unwrap_or_else(|| "-".to_string());
            let idx_str = format!("{:>width$}", position, width = idx_width);
            let time_ago = format_time_ago(entry.date_added);

            let mut text = format!("{}  {}", entry.word, entry.meaning);
            if !entry.translation.is_empty() {
                text.push_str(&format!(" ({})", entry.translation));
            }
            let available = LINE_WIDTH.saturating_sub(idx_width + 1 + TIME_WIDTH);
            let text = truncate_to_width(&text, available);
            let padding = available.saturating_sub(text.width());

            // Bold only the headword part
            let split = entry.word.len();
            let (head, rest) = if text.is_char_boundary(split) {
                text.split_at(split)
            } else {
                (text.as_str(), "")
            };
            format!(
                "{} {}{}{}{}",
                idx_str.yellow(),
                head.bold(),
                rest,
                " ".repeat(padding),
                time_ago.dimmed()
            )
        })
        .collect()
}

pub(super) fn print_word(entry: &WordEntry) {
    println!("{}", entry.word.bold());
    println!("  {} {}", "meaning:".dimmed(), entry.meaning);
    if !entry.translation.is_empty() {
        println!("  {} {}", "translation:".dimmed(), entry.translation);
    }
    if !entry.example.is_empty() {
        println!("  {} {}", "example:".dimmed(), entry.example.italic());
    }
}

pub(super) fn print_question(entry: &WordEntry, completed: u64) {
    println!();
    println!(
        "{}  {}",
        entry.word.bold().cyan(),
        format!("[{} completed]", completed).dimmed()
    );
}

pub(super) fn print_answer(answer: &QuizAnswer) {
    println!("  {}", answer.meaning.green());
    if let Some(translation) = &answer.translation {
        println!("  {} {}", "translation:".dimmed(), translation);
    }
    if let Some(example) = &answer.example {
        println!("  {} {}", "example:".dimmed(), example.italic());
    }
}

pub(super) fn print_stats(stats: &QuizStats) {
    println!("{} {}", "Total words:".dimmed(), stats.total_words);
    println!("{} {}", "Completed:  ".dimmed(), stats.completed);
}

/// Cut `s` to at most `max_width` columns, marking the cut with an ellipsis.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordzapp::model::WordDraft;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("gato", 10), "gato");
        assert_eq!(truncate_to_width("gato", 4), "gato");
    }

    #[test]
    fn truncate_marks_the_cut() {
        let cut = truncate_to_width("ubiquitous", 5);
        assert_eq!(cut, "ubiq…");
        assert_eq!(cut.width(), 5);
    }

    #[test]
    fn truncate_counts_wide_chars() {
        let cut = truncate_to_width("日本語の単語", 5);
        assert!(cut.width() <= 5);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let s = format_time_ago(Utc::now());
        assert_eq!(s.len(), TIME_WIDTH);
        assert!(s.trim_start().ends_with("ago") || s.trim_start().starts_with("now"));
    }

    #[test]
    fn word_lines_use_stored_positions() {
        colored::control::set_override(false);
        let stored = vec![
            WordEntry::new(WordDraft::new("gato", "cat").with_translation("Katze")),
            WordEntry::new(WordDraft::new("perro", "dog")),
        ];
        let listed = vec![stored[1].clone(), stored[0].clone()];
        let lines = word_lines(&listed, &stored);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 2. perro  dog"));
        assert!(lines[1].starts_with(" 1. gato  cat (Katze)"));
    }
}
