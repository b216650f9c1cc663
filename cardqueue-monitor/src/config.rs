//! Monitor configuration
//!
//! Defines all configurable parameters for the monitor including
//! the queue endpoint, polling interval and rendering options.

use std::time::Duration;

use cardqueue_client::DEFAULT_QUEUE_URL;
use cardqueue_core::render::{DEFAULT_MAX_LABEL_LENGTH, RenderOptions, VisualMode};

/// Default polling interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Monitor configuration
///
/// Deployments have run at both 3s and 5s intervals, so the interval is
/// always taken from configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Queue endpoint URL (e.g., "http://localhost:8080/cards/queue")
    pub queue_url: String,

    /// How often to poll the queue endpoint
    pub poll_interval: Duration,

    /// Maximum time a single request may take
    pub request_timeout: Duration,

    /// Maximum number of characters shown for a job name
    pub max_label_length: usize,

    /// Whether style classes are attached to rendered jobs
    pub visual_mode: VisualMode,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(queue_url: String) -> Self {
        Self {
            queue_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_label_length: DEFAULT_MAX_LABEL_LENGTH,
            visual_mode: VisualMode::Mapped,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - QUEUE_URL (optional, default: http://localhost:8080/cards/queue)
    /// - POLL_INTERVAL_MS (optional, milliseconds, default: 3000)
    /// - REQUEST_TIMEOUT_MS (optional, milliseconds, default: 10000)
    /// - MAX_LABEL_LENGTH (optional, default: 16)
    /// - VISUAL_MODE (optional, `mapped` or `plain`, default: mapped)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let queue_url = lookup("QUEUE_URL").unwrap_or_else(|| DEFAULT_QUEUE_URL.to_string());

        let poll_interval = lookup("POLL_INTERVAL_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        let request_timeout = lookup("REQUEST_TIMEOUT_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let max_label_length = lookup("MAX_LABEL_LENGTH")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_LABEL_LENGTH);

        let visual_mode = match lookup("VISUAL_MODE") {
            Some(value) => parse_visual_mode(&value)?,
            None => VisualMode::Mapped,
        };

        Ok(Self {
            queue_url,
            poll_interval,
            request_timeout,
            max_label_length,
            visual_mode,
        })
    }

    /// Rendering options derived from this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_label_length: self.max_label_length,
            visual_mode: self.visual_mode,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.queue_url.is_empty() {
            anyhow::bail!("queue_url cannot be empty");
        }

        if !self.queue_url.starts_with("http://") && !self.queue_url.starts_with("https://") {
            anyhow::bail!("queue_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.max_label_length == 0 {
            anyhow::bail!("max_label_length must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_URL.to_string())
    }
}

fn parse_visual_mode(value: &str) -> anyhow::Result<VisualMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mapped" => Ok(VisualMode::Mapped),
        "plain" => Ok(VisualMode::Plain),
        other => anyhow::bail!("VISUAL_MODE must be `mapped` or `plain`, got `{}`", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.queue_url, "http://localhost:8080/cards/queue");
        assert_eq!(config.poll_interval, Duration::from_millis(3000));
        assert_eq!(config.max_label_length, 16);
        assert_eq!(config.visual_mode, VisualMode::Mapped);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("QUEUE_URL", "https://cards.example.com/queue"),
            ("POLL_INTERVAL_MS", "5000"),
            ("REQUEST_TIMEOUT_MS", "2500"),
            ("MAX_LABEL_LENGTH", "24"),
            ("VISUAL_MODE", "Plain"),
        ]))
        .unwrap();

        assert_eq!(config.queue_url, "https://cards.example.com/queue");
        assert_eq!(config.poll_interval, Duration::from_millis(5000));
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.max_label_length, 24);
        assert_eq!(config.visual_mode, VisualMode::Plain);
    }

    #[test]
    fn test_from_lookup_falls_back_on_garbage() {
        let config = Config::from_lookup(lookup_from(&[
            ("POLL_INTERVAL_MS", "soon"),
            ("MAX_LABEL_LENGTH", "-3"),
        ]))
        .unwrap();

        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
        assert_eq!(config.max_label_length, DEFAULT_MAX_LABEL_LENGTH);
    }

    #[test]
    fn test_from_lookup_rejects_unknown_visual_mode() {
        let result = Config::from_lookup(lookup_from(&[("VISUAL_MODE", "fancy")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Invalid URL should fail
        config.queue_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.queue_url = DEFAULT_QUEUE_URL.to_string();

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_millis(5000);

        config.max_label_length = 0;
        assert!(config.validate().is_err());
        config.max_label_length = 16;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_render_options() {
        let mut config = Config::default();
        config.max_label_length = 10;
        config.visual_mode = VisualMode::Plain;

        let options = config.render_options();
        assert_eq!(options.max_label_length, 10);
        assert_eq!(options.visual_mode, VisualMode::Plain);
    }
}
