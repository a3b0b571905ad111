use flexi_logger::{
  colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
  LoggerHandle, Naming,
};

use crate::config::Config;

/// Start the logger. Logs go to stderr unless a log directory is configured.
///
/// The returned handle must be kept alive for the whole run.
pub fn setup_logging(config: &Config) -> Result<LoggerHandle, FlexiLoggerError> {
  let logger = Logger::try_with_env_or_str(&config.log_level)?;

  let logger = match &config.log_dir {
    Some(dir) => logger
      .log_to_file(FileSpec::default().directory(dir))
      .format(opt_format)
      .rotate(
        Criterion::Size(1024 * 1024),
        Naming::Numbers,
        Cleanup::KeepLogFiles(3),
      ),
    None => logger.format(colored_default_format),
  };

  logger.start()
}
