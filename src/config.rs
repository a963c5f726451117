//! Configuration for the classification pipeline.
//!
//! Strongly-typed configuration loaded from a TOML file. It covers the
//! corpus paths, the train/test split parameters and the decision
//! threshold applied on top of raw spam scores.

use serde::Deserialize;
use std::path::Path;

use crate::error::ClassifierError;

/// Main configuration structure loaded from `config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Corpus paths and split parameters
    pub data: DataConfig,
    /// Decision parameters
    pub classifier: ClassifierConfig,
}

/// Corpus paths and split parameters.
#[derive(Debug, Deserialize)]
pub struct DataConfig {
    /// Full labeled corpus, one message per line
    pub corpus_path: String,
    /// Destination of the training partition
    pub train_path: String,
    /// Destination of the test partition
    pub test_path: String,
    /// Seed of the pseudo-random line splitter
    pub split_seed: u64,
    /// Probability that a line lands in the training partition
    pub split_probability: f64,
}

/// Decision parameters.
#[derive(Debug, Deserialize)]
pub struct ClassifierConfig {
    /// Scores strictly above this value are classified as spam
    pub spam_threshold: f64,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns `Ok(Config)` if the file can be read and parsed, and an
    /// error otherwise; callers typically fall back to [`Config::default`]
    /// when the file is absent.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ClassifierError::io(path, source))?;
        let config: Config = toml::from_str(&contents).map_err(|source| {
            ClassifierError::InvalidConfig {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(config)
    }
}

impl Default for Config {
    /// Default configuration used when `config.toml` is not available.
    fn default() -> Self {
        Config {
            data: DataConfig {
                corpus_path: "data/SMSSpamCollection".to_string(),
                train_path: "data/train".to_string(),
                test_path: "data/test".to_string(),
                split_seed: 1234,
                split_probability: 0.6,
            },
            classifier: ClassifierConfig {
                spam_threshold: 0.5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[data]
corpus_path = "corpus"
train_path = "train"
test_path = "test"
split_seed = 99
split_probability = 0.75

[classifier]
spam_threshold = 0.4
"#,
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data.corpus_path, "corpus");
        assert_eq!(config.data.split_seed, 99);
        assert!((config.data.split_probability - 0.75).abs() < 1e-9);
        assert!((config.classifier.spam_threshold - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_defaults_match_reference_experiment() {
        let config = Config::default();
        assert_eq!(config.data.split_seed, 1234);
        assert!((config.data.split_probability - 0.6).abs() < 1e-9);
        assert!((config.classifier.spam_threshold - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[data\ncorpus_path =").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidConfig { .. }));
    }

    #[test]
    fn test_missing_config_is_an_io_error() {
        let err = Config::load(Path::new("no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ClassifierError::Io { .. }));
    }
}
