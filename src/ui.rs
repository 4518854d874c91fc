// UI module for consistent terminal output with progress bars and styling
//
// Messages go to stdout, errors and progress to stderr. Progress bars are only
// drawn when stderr is a terminal.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use console::{Term, style};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Check if stderr is a TTY (for interactive output)
fn is_tty() -> bool {
    Term::stderr().is_term()
}

fn hide_unless_tty(pb: &ProgressBar) {
    if !is_tty() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
}

/// Create a styled spinner for API calls
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    hide_unless_tty(&pb);

    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars(SPINNER_CHARS)
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());

    if is_tty() {
        pb.enable_steady_tick(Duration::from_millis(80));
    }

    pb
}

/// Create a progress bar for a download, indeterminate when the size is unknown
pub fn download_bar(total_size: Option<u64>) -> ProgressBar {
    let pb = match total_size {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.cyan} Downloading [{bar:25.cyan/dim}] {bytes}/{total_bytes} ({bytes_per_sec})",
                    )
                    .unwrap()
                    .tick_chars(SPINNER_CHARS)
                    .progress_chars("━━╺"),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .tick_chars(SPINNER_CHARS)
                    .template("{spinner:.cyan} Downloading {bytes} ({bytes_per_sec})")
                    .unwrap(),
            );
            pb
        }
    };
    hide_unless_tty(&pb);
    pb
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print an info/action message with arrow
pub fn action(message: &str) {
    println!("{} {}", style("→").cyan(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Print a status message (for dry-run, etc.)
pub fn status(prefix: &str, message: &str) {
    println!("{} {}", style(prefix).cyan().bold(), message);
}

/// Finish a spinner with the resolved name and value
pub fn finish_spinner_resolved(pb: &ProgressBar, name: &str, value: &str) {
    let msg = format!("{} {} {}", style("✓").green(), name, style(value).dim());
    if is_tty() {
        pb.set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        pb.finish_with_message(msg);
    } else {
        pb.finish_and_clear();
        println!("{}", msg);
    }
}

/// Clear a progress bar without leaving a message
pub fn clear_bar(pb: &ProgressBar) {
    pb.finish_and_clear();
}
