//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::IsTerminal;

use colored::{ColoredString, Colorize};

use crate::domain::{RenderedResult, ScoreTier, Tone};
use crate::infrastructure::traits::ResultSurface;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print numbered list item, indented
pub fn item(position: usize, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", format!("{position}.").dimmed(), msg);
}

/// Print plain output (no color, for data such as JSON or TOML)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Color a rendered prediction result by its tone.
pub fn paint(result: &RenderedResult) -> ColoredString {
    match result.tone {
        Tone::Highlight => result.text.cyan().bold(),
        Tone::Score(ScoreTier::Low) => result.text.red().bold(),
        Tone::Score(ScoreTier::Medium) => result.text.yellow().bold(),
        Tone::Score(ScoreTier::High) => result.text.green().bold(),
        Tone::Error => result.text.red(),
    }
}

/// Result surface on the terminal: loading line on stderr, result on stdout.
///
/// On an interactive stderr the loading line is erased once the request ends.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    inline_loading: bool,
}

impl ResultSurface for TerminalSurface {
    fn show_loading(&mut self) {
        let msg = "⏳ Prédiction en cours...".dimmed();
        if std::io::stderr().is_terminal() {
            eprint!("{}", msg);
            self.inline_loading = true;
        } else {
            eprintln!("{}", msg);
        }
    }

    fn hide_loading(&mut self) {
        if self.inline_loading {
            eprint!("\r\x1b[2K");
            self.inline_loading = false;
        }
    }

    fn clear_result(&mut self) {}

    fn show_result(&mut self, result: &RenderedResult) {
        println!("{}", paint(result));
    }
}
