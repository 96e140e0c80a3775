//! Cargo-style terminal output on stderr.

use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Clone, Copy)]
enum Tone {
    Action,
    Info,
    Warn,
}

impl Tone {
    fn style(self) -> Style {
        let style = Style::new().bold();
        match self {
            Tone::Action => style.green(),
            Tone::Info => style.cyan(),
            Tone::Warn => style.yellow(),
        }
    }
}

fn print_status(tone: Tone, label: &str, message: &str) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        tone.style().apply_to(label)
    );
}

/// Print a status line such as `   Packaging demo-lib-1.0.0.jar`, with the
/// label right-aligned to 12 columns in bold green.
pub fn status(label: &str, message: &str) {
    print_status(Tone::Action, label, message);
}

/// [`status`] with a cyan label, for lines that report rather than act.
pub fn status_info(label: &str, message: &str) {
    print_status(Tone::Info, label, message);
}

/// [`status`] with a yellow label.
pub fn status_warn(label: &str, message: &str) {
    print_status(Tone::Warn, label, message);
}

/// A bar counting `len` uploads.
pub fn progress_bar(len: u64, message: &str) -> ProgressBar {
    let style = ProgressStyle::with_template("{msg:>12.cyan.bold} [{bar:30}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    ProgressBar::new(len)
        .with_style(style)
        .with_message(message.to_string())
}
