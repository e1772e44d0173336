use std::path::PathBuf;

use shared::currency::{CurrencyNormalizer, DEFAULT_EXCHANGE_RATE};

/// Dashboard configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./.dashboard | Working directory |
/// | PREFERENCES_FILE | {WORK_DIR}/preferences.json | UI preference store |
/// | EXCHANGE_RATE | 15000 | USD → IDR rate for mock figures |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | Daily rolling log files, when the directory exists |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// EXCHANGE_RATE=16250 LOG_LEVEL=debug dashboard report
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the preference file by default
    pub work_dir: String,
    /// Preference store file
    pub preferences_file: PathBuf,
    /// USD → IDR rate
    pub exchange_rate: f64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let work_dir = lookup("WORK_DIR").unwrap_or_else(|| "./.dashboard".into());
        let preferences_file = lookup("PREFERENCES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(&work_dir).join("preferences.json"));

        let exchange_rate = match lookup("EXCHANGE_RATE") {
            None => DEFAULT_EXCHANGE_RATE,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(rate) if rate.is_finite() && rate > 0.0 => rate,
                _ => {
                    tracing::warn!(value = %raw, "Invalid EXCHANGE_RATE, using default");
                    DEFAULT_EXCHANGE_RATE
                }
            },
        };

        Self {
            work_dir,
            preferences_file,
            exchange_rate,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR"),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Override the working directory and rate
    ///
    /// Mostly for tests
    pub fn with_overrides(work_dir: impl Into<String>, exchange_rate: f64) -> Self {
        let work_dir = work_dir.into();
        let mut config = Self::from_lookup(|_| None);
        config.preferences_file = PathBuf::from(&work_dir).join("preferences.json");
        config.work_dir = work_dir;
        config.exchange_rate = exchange_rate;
        config
    }

    /// Normalizer using the configured rate
    pub fn normalizer(&self) -> CurrencyNormalizer {
        CurrencyNormalizer::default().with_exchange_rate(self.exchange_rate)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.work_dir, "./.dashboard");
        assert_eq!(config.preferences_file, PathBuf::from("./.dashboard/preferences.json"));
        assert_eq!(config.exchange_rate, 15_000.0);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);
        assert!(config.is_development());
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = config_from(&[
            ("WORK_DIR", "/data/dash"),
            ("EXCHANGE_RATE", "16250"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.preferences_file, PathBuf::from("/data/dash/preferences.json"));
        assert_eq!(config.exchange_rate, 16_250.0);
        assert!(config.is_production());
        assert_eq!(config.normalizer().exchange_rate(), 16_250.0);
    }

    #[test]
    fn test_explicit_preferences_file() {
        let config = config_from(&[("PREFERENCES_FILE", "/tmp/p.json")]);
        assert_eq!(config.preferences_file, PathBuf::from("/tmp/p.json"));
    }

    #[test]
    fn test_invalid_rate_uses_default() {
        for raw in ["abc", "-5", "0", "inf", "NaN"] {
            let config = config_from(&[("EXCHANGE_RATE", raw)]);
            assert_eq!(config.exchange_rate, DEFAULT_EXCHANGE_RATE, "{raw}");
        }
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("/srv/dash", 14_000.0);
        assert_eq!(config.work_dir, "/srv/dash");
        assert_eq!(config.preferences_file, PathBuf::from("/srv/dash/preferences.json"));
        assert_eq!(config.exchange_rate, 14_000.0);
    }
}
