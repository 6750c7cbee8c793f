use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, Duplicate, FileSpec,
    FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use std::path::PathBuf;

/// Size after which a log file is rotated
const ROTATE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Fallback level when `RUST_LOG` is not set
    pub level: String,
    /// Write rotated log files there in addition to stderr
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// Starts the global logger. Keep the returned handle alive for the lifetime of the program.
pub fn setup_logging(config: &LoggingConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(&config.level)?;

    match &config.directory {
        Some(directory) => logger
            .log_to_file(FileSpec::default().directory(directory))
            .format(opt_format)
            .duplicate_to_stderr(Duplicate::Info)
            .rotate(
                Criterion::Size(ROTATE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(7),
            )
            .start(),
        None => logger.format(colored_default_format).start(),
    }
}
