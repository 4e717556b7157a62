//! Logging infrastructure for pathtag.
//!
//! The library itself only emits records through the `log` facade. Binaries
//! call [`init_logger`] to route those records to stderr at a level chosen by
//! CLI flags or the `PATHTAG_LOG_MODE` environment variable.

use std::env;
use std::fmt;

use log::{LevelFilter, Metadata, Record};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "PATHTAG_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use pathtag::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all log output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtag::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter for this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }

    /// Resolves the level from CLI flags, then the environment, then the
    /// default (Normal). `verbose` wins over `quiet`.
    #[must_use]
    pub fn resolve(verbose: bool, quiet: bool) -> Self {
        if verbose {
            return Self::Verbose;
        }
        if quiet {
            return Self::Quiet;
        }

        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|value| Self::parse(&value).ok())
            .unwrap_or(Self::Normal)
    }
}

/// A stderr logger for the `log` facade.
///
/// Records are printed as `LEVEL: message`.
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn format(record: &Record<'_>) -> String {
        format!("{}: {}", record.level(), record.args())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

/// Installs the stderr logger as the global `log` backend.
///
/// The level comes from [`LogLevel::resolve`]. Installing twice is harmless:
/// the first logger stays and the returned level reflects the request.
///
/// # Examples
///
/// ```
/// use pathtag::{init_logger, LogLevel};
///
/// let level = init_logger(true, false);
/// assert_eq!(level, LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = LogLevel::resolve(verbose, quiet);
    if log::set_boxed_logger(Box::new(Logger::new(level))).is_ok() {
        log::set_max_level(level.filter());
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};
    use serial_test::serial;

    fn with_env<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    fn test_log_level_display_and_parse() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(LogLevel::parse(&level.to_string()).unwrap(), level);
        }
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_filters() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled() {
        let logger = Logger::new(LogLevel::Normal);
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));

        let quiet = Logger::new(LogLevel::Quiet);
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!quiet.enabled(&error));
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_format() {
        let formatted = Logger::format(
            &Record::builder()
                .args(format_args!("relocated {}", "/a"))
                .level(Level::Debug)
                .build(),
        );
        assert_eq!(formatted, "DEBUG: relocated /a");
    }

    #[test]
    #[serial]
    fn test_resolve_flags_override_env() {
        with_env(Some("quiet"), || {
            assert_eq!(LogLevel::resolve(true, false), LogLevel::Verbose);
            assert_eq!(LogLevel::resolve(true, true), LogLevel::Verbose);
            assert_eq!(LogLevel::resolve(false, false), LogLevel::Quiet);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_defaults() {
        with_env(None, || {
            assert_eq!(LogLevel::resolve(false, false), LogLevel::Normal);
            assert_eq!(LogLevel::resolve(false, true), LogLevel::Quiet);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_invalid_env_falls_back() {
        with_env(Some("chatty"), || {
            assert_eq!(LogLevel::resolve(false, false), LogLevel::Normal);
        });
    }
}
