//! Command-line argument definition and processing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use crate::args::utils::parse_var;

/// Comondo - bilingual content and scroll behaviour for the Comondo site
#[derive(Parser, Debug)]
#[command(name = "comondo")]
#[command(version)]
#[command(about = "Bilingual content and scroll behaviour for the Comondo site", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Specify the configuration directory (default: ~/.config/comondo)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a translation key in the active (or given) language
    T {
        /// Dot-separated key, e.g. home.hero.title
        key: String,

        /// Placeholder value as name=value (repeatable)
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,

        /// Resolve in this language without changing the stored preference
        #[arg(long)]
        lang: Option<String>,
    },

    /// Show the active language, or switch to TAG and persist it
    Lang {
        /// Language tag (en, id)
        tag: Option<String>,
    },

    /// Compare the key sets of all locale files
    CheckLocales {
        /// Locales directory (default: configured or installed locales)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay scroll offsets against a page and print what the page would do
    Simulate {
        /// Page to lay out
        #[arg(long, value_enum, default_value_t = Page::Home)]
        page: Page,

        /// Viewport height in px
        #[arg(long, default_value_t = 900.0)]
        viewport_height: f64,

        /// Scroll offsets in px, in order
        #[arg(required = true, allow_negative_numbers = true)]
        offsets: Vec<f64>,
    },
}

/// Pages the simulator can lay out.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Landing page sections.
    Home,
    /// Roadmap phases driving the flip card.
    Roadmap,
}

/// What: Run the selected subcommand.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Process exit code.
///
/// Details:
/// - `0` on success, `1` on a failed check or unreadable input, `2` on an unsupported language tag.
pub async fn process_args(args: &Args) -> ExitCode {
    use crate::args::{i18n, scroll};

    match &args.command {
        Command::T { key, vars, lang } => i18n::handle_translate(key, vars, lang.as_deref()),
        Command::Lang { tag } => i18n::handle_lang(tag.as_deref()),
        Command::CheckLocales { dir, json } => i18n::handle_check_locales(dir.as_deref(), *json),
        Command::Simulate {
            page,
            viewport_height,
            offsets,
        } => scroll::handle_simulate(*page, *viewport_height, offsets).await,
    }
}
