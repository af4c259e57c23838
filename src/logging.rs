use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{runtime::ConfigErrors, Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Send log messages at `level` and above to the file at `path`, appending
/// to it if it already exists
pub(crate) fn init(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_owned(),
            source,
        })?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file {}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid logging configuration")]
    Config(#[from] ConfigErrors),
    #[error("a logger has already been installed")]
    Install(#[from] log::SetLoggerError),
}
