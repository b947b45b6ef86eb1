//! Output formatting for CLI responses.

/// Prints a warning to stderr.
pub fn print_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
