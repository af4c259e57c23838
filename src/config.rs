use crate::consts;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings about drawing & timing
    #[serde(default)]
    pub(crate) display: DisplayConfig,

    /// Settings about the log file
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snakescape").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    /// How many times per second input is processed and the screen redrawn
    pub(crate) frame_rate: FrameRate,
}

/// A frame rate in frames per second, between 1 and [`FrameRate::MAX`]
/// inclusive
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "u32")]
pub(crate) struct FrameRate(u32);

impl FrameRate {
    pub(crate) const MAX: u32 = 240;

    /// The time between the starts of consecutive frames
    pub(crate) fn period(self) -> Duration {
        Duration::from_secs(1) / self.0
    }
}

impl Default for FrameRate {
    fn default() -> FrameRate {
        FrameRate(consts::DEFAULT_FRAME_RATE)
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = FrameRateError;

    fn try_from(value: u32) -> Result<FrameRate, FrameRateError> {
        if (1..=FrameRate::MAX).contains(&value) {
            Ok(FrameRate(value))
        } else {
            Err(FrameRateError(value))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("frame rate must be between 1 and {max}, got {0}", max = FrameRate::MAX)]
pub(crate) struct FrameRateError(u32);

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to write log messages to.  Nothing is logged if this is unset.
    pub(crate) file: Option<PathBuf>,

    /// Least severe level of messages to log
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs;

    fn load_str(content: &str) -> Result<Config, ConfigError> {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        Config::load(&path, false)
    }

    #[test]
    fn missing_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let cfg = Config::load(&tmpdir.path().join("config.toml"), true).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.display.frame_rate.period(), Duration::from_secs(1) / 60);
        assert_eq!(cfg.log.level, LevelFilter::Info);
    }

    #[test]
    fn missing_required() {
        let tmpdir = tempfile::tempdir().unwrap();
        let r = Config::load(&tmpdir.path().join("config.toml"), false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn empty() {
        assert_eq!(load_str("").unwrap(), Config::default());
    }

    #[test]
    fn full() {
        let cfg = load_str(concat!(
            "[display]\n",
            "frame-rate = 30\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/snakescape.log\"\n",
            "level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                display: DisplayConfig {
                    frame_rate: FrameRate(30),
                },
                log: LogConfig {
                    file: Some(PathBuf::from("/tmp/snakescape.log")),
                    level: LevelFilter::Debug,
                },
            }
        );
    }

    #[test]
    fn partial_log_section() {
        let cfg = load_str("[log]\nlevel = \"trace\"\n").unwrap();
        assert_eq!(cfg.display, DisplayConfig::default());
        assert_eq!(cfg.log.file, None);
        assert_eq!(cfg.log.level, LevelFilter::Trace);
    }

    #[rstest]
    #[case("[display]\nframe-rate = 0\n")]
    #[case("[display]\nframe-rate = 241\n")]
    #[case("[display]\nframe-rate = \"fast\"\n")]
    #[case("[log]\nlevel = \"loud\"\n")]
    #[case("display = 60\n")]
    fn invalid(#[case] content: &str) {
        assert!(matches!(load_str(content), Err(ConfigError::Parse(_))));
    }

    #[rstest]
    #[case(1, true)]
    #[case(60, true)]
    #[case(240, true)]
    #[case(0, false)]
    #[case(1000, false)]
    fn frame_rate_bounds(#[case] value: u32, #[case] ok: bool) {
        assert_eq!(FrameRate::try_from(value).is_ok(), ok);
    }
}
