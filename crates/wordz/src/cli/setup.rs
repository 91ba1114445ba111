use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordzapp::model::SortMode;

#[derive(Parser, Debug)]
#[command(
    name = "wordz",
    bin_name = "wordz",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Personal vocabulary flashcards with random quizzes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Data directory (defaults to $WORDZ_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account
    #[command(display_order = 1)]
    Register {
        username: String,

        #[arg(long, env = "WORDZ_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in and remember the session
    #[command(display_order = 2)]
    Login {
        username: String,

        #[arg(long, env = "WORDZ_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the current session
    #[command(display_order = 3)]
    Logout,

    /// Show the logged-in user
    #[command(display_order = 4)]
    Whoami,

    /// Add a word
    #[command(alias = "a", display_order = 10)]
    Add {
        word: String,

        meaning: String,

        /// Translation into another language
        #[arg(short, long)]
        translation: Option<String>,

        /// Example sentence
        #[arg(short, long)]
        example: Option<String>,
    },

    /// List saved words
    #[command(alias = "ls", display_order = 11)]
    List {
        /// Search term, matched against every field
        #[arg(short, long)]
        search: Option<String>,

        /// newest, oldest, alphabetical or reverse
        #[arg(long)]
        sort: Option<SortMode>,
    },

    /// Search saved words
    #[command(display_order = 12)]
    Search { term: String },

    /// Change fields of a word
    #[command(display_order = 13)]
    Edit {
        /// Position, id or the word itself
        selector: String,

        #[arg(long)]
        word: Option<String>,

        #[arg(long)]
        meaning: Option<String>,

        #[arg(short, long)]
        translation: Option<String>,

        #[arg(short, long)]
        example: Option<String>,
    },

    /// Delete a word
    #[command(alias = "rm", display_order = 14)]
    Delete {
        /// Position, id or the word itself
        selector: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Number of saved words
    #[command(display_order = 15)]
    Count,

    /// Quiz yourself on random words
    #[command(display_order = 20)]
    Quiz {
        #[command(subcommand)]
        action: Option<QuizCommands>,
    },

    /// Write a JSON backup to a file
    #[command(display_order = 30)]
    Export {
        /// Include account metadata
        #[arg(long, conflicts_with = "all")]
        user: bool,

        /// Every user's words (no credentials)
        #[arg(long)]
        all: bool,

        /// Directory to write the file into
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Load words from a JSON backup
    #[command(display_order = 31)]
    Import {
        file: PathBuf,

        /// Replace the current list instead of merging into it
        #[arg(long)]
        replace: bool,
    },

    /// Show the resolved configuration
    #[command(display_order = 40)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum QuizCommands {
    /// Words saved and words completed
    Stats,

    /// Set the completed count back to zero
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
