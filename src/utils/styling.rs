//! Terminal styling utilities for messages printed around the wizard

use console::{style, Emoji};
use std::io::{self, Write};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static CROSS: Emoji<'_, '_> = Emoji("✖ ", "x ");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("podferry").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Pick a source and a destination, we carry the rest").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    let _ = write_warning(&mut io::stderr(), message);
}

pub fn write_warning(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "    {} {}", WARN, style(message).yellow())
}

/// Print the cancellation notice to stderr so `--json` stdout stays parseable
pub fn print_cancelled() {
    let _ = write_cancelled(&mut io::stderr());
}

pub fn write_cancelled(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "    {} {}", CROSS, style("Cancelled by user.").yellow())
}

/// Print where the configuration was saved
pub fn print_saved(path: &Path) {
    println!(
        "    {} Saved to {}",
        SAVE,
        style(truncate_path(path, 60)).cyan()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Transfer configured!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

/// Shorten `s` to at most `max_len` characters, keeping the tail
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let keep = max_len.saturating_sub(3);
        let tail: String = s.chars().skip(count - keep).collect();
        format!("...{}", tail)
    }
}
