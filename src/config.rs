//! Command-line surface and validated viewer configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("update interval must be positive, got {0}s")]
    NonPositiveInterval(f64),
}

/// Image viewer that automatically reloads a remote image at a given interval.
#[derive(Debug, Parser)]
#[command(name = "imgwatch", version, about)]
pub struct Args {
    /// URL of the image resource to watch
    pub url: String,

    /// Seconds to wait between updates
    #[arg(short = 'n', long, value_name = "SECONDS", default_value_t = 0.5)]
    pub interval: f64,

    /// Start in fullscreen mode
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Directory to save every fetched frame into
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of recent frames kept for scrubbing (0 disables history)
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    pub history: usize,
}

impl Args {
    pub fn into_config(self) -> Result<ViewerConfig, ConfigError> {
        // Also rejects NaN, which from_secs_f64 would panic on.
        if !(self.interval > 0.0) {
            return Err(ConfigError::NonPositiveInterval(self.interval));
        }
        Ok(ViewerConfig {
            url: self.url,
            interval: Duration::from_secs_f64(self.interval),
            output_dir: self.output_dir,
            history_capacity: self.history,
            fullscreen: self.fullscreen,
        })
    }
}

/// Validated startup configuration, consumed by the application layer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub url: String,
    pub interval: Duration,
    pub output_dir: Option<PathBuf>,
    pub history_capacity: usize,
    pub fullscreen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = args(&["imgwatch", "http://example.com/cam.jpg"])
            .into_config()
            .unwrap();
        assert_eq!(config.url, "http://example.com/cam.jpg");
        assert_eq!(config.interval, Duration::from_millis(500));
        assert_eq!(config.history_capacity, 0);
        assert!(config.output_dir.is_none());
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_full_argument_set() {
        let config = args(&[
            "imgwatch",
            "http://example.com/cam.jpg",
            "-n",
            "2.5",
            "-f",
            "-o",
            "/tmp/frames",
            "--history",
            "8",
        ])
        .into_config()
        .unwrap();
        assert_eq!(config.interval, Duration::from_secs_f64(2.5));
        assert!(config.fullscreen);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/frames")));
        assert_eq!(config.history_capacity, 8);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = args(&["imgwatch", "http://example.com/a.jpg", "-n", "0"]).into_config();
        assert!(matches!(result, Err(ConfigError::NonPositiveInterval(_))));
    }

    #[test]
    fn test_negative_interval_rejected() {
        let mut parsed = args(&["imgwatch", "http://example.com/a.jpg"]);
        parsed.interval = -1.5;
        assert!(matches!(
            parsed.into_config(),
            Err(ConfigError::NonPositiveInterval(_))
        ));
    }

    #[test]
    fn test_nan_interval_rejected() {
        let mut parsed = args(&["imgwatch", "http://example.com/a.jpg"]);
        parsed.interval = f64::NAN;
        assert!(parsed.into_config().is_err());
    }

    #[test]
    fn test_url_required() {
        assert!(Args::try_parse_from(["imgwatch"]).is_err());
    }
}
