//! Progress display module
//!
//! Styled console messages, a spinner for the corpus preparation phase and
//! the end-of-run statistics summary.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════╗
║                     ANAGRAM-FINDER                       ║
║          Anagram search over system word lists           ║
╚══════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for one run. The pipeline is single-threaded by design, so
/// plain fields suffice.
#[derive(Debug)]
pub struct RunStats {
    pub words_loaded: u64,
    pub groups_total: u64,
    pub groups_printed: u64,
    pub words_printed: u64,
    start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            words_loaded: 0,
            groups_total: 0,
            groups_printed: 0,
            words_printed: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                      RUN COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!(
            "  {} {}",
            "Unique words:   ".green(),
            format_number(self.words_loaded)
        );
        println!(
            "  {} {}",
            "Anagram groups: ".green(),
            format_number(self.groups_total)
        );
        println!(
            "  {} {}",
            "Groups printed: ".green().bold(),
            format_number(self.groups_printed).green().bold()
        );
        println!(
            "  {} {}",
            "Words printed:  ".green(),
            format_number(self.words_printed)
        );

        println!();
        println!("  {} {:?}", "Duration:       ".green(), self.elapsed());
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
