//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Logger filter when `RUST_LOG` is unset. Prompts log below it so each
/// message reaches stderr once.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    log::debug!("{msg}");
    if let Some(line) = warning_line(msg, quiet::enabled()) {
        eprintln!("{line}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    log::debug!("{msg}");
    eprintln!("{}", error_line(msg));
}

fn warning_line(msg: &str, quiet: bool) -> Option<String> {
    (!quiet).then(|| format!("{YELLOW}{msg}{RESET}"))
}

fn error_line(msg: &str) -> String {
    format!("{RED}{msg}{RESET}")
}

pub fn urandom_unavailable() {
    warn("Warning: /dev/urandom not available, using hardware entropy");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true; // Fallback on read error
    }

    eprintln!("\nAborted.");
    false
}

#[cfg(test)]
mod tests {
    use log::{Level, Log, Metadata};

    use super::*;

    fn default_logger() -> env_logger::Logger {
        env_logger::Builder::new()
            .parse_filters(DEFAULT_LOG_FILTER)
            .build()
    }

    fn logged(level: Level) -> bool {
        let metadata = Metadata::builder()
            .level(level)
            .target(module_path!())
            .build();
        default_logger().enabled(&metadata)
    }

    #[test]
    fn quiet_warning_prints_nothing() {
        assert_eq!(warning_line("careful", true), None);
        assert!(!logged(Level::Debug));
    }

    #[test]
    fn warning_and_error_print_once() {
        assert_eq!(
            warning_line("careful", false).as_deref(),
            Some("\x1b[33mcareful\x1b[0m")
        );
        assert_eq!(error_line("broken"), "\x1b[31mbroken\x1b[0m");
        assert!(logged(Level::Warn));
        assert!(!logged(Level::Debug));
    }
}
