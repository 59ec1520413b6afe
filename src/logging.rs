//! Stderr reporter with a verbose flag.
//!
//! Everything goes to standard error: the process handles secret material
//! and may run setuid, so there is no persistent log file, and standard
//! output stays reserved for `--help`, `--version`, and the `--status`
//! summary.

/// Minimal leveled logger for command diagnostics and notices.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// Create a logger; `verbose` gates [`debug`](Self::debug) output.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// One-line failure diagnostic.
    pub fn error(&self, msg: &str) {
        eprintln!("\x1b[31mERROR\x1b[0m {msg}");
    }

    /// Non-fatal warning.
    pub fn warn(&self, msg: &str) {
        eprintln!("\x1b[33mWARN\x1b[0m  {msg}");
    }

    /// Success notices and progress lines.
    pub fn info(&self, msg: &str) {
        eprintln!("{msg}");
    }

    /// Detail lines, shown only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            eprintln!("\x1b[2m{msg}\x1b[0m");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_new() {
        let log = Logger::new(false);
        assert!(!log.verbose);
    }

    #[test]
    fn logger_verbose() {
        let log = Logger::new(true);
        assert!(log.verbose);
    }

    #[test]
    fn logger_is_copy() {
        let log = Logger::new(true);
        let copy = log;
        assert!(copy.verbose && log.verbose);
    }
}
