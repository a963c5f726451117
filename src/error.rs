//! Error types for the classification pipeline.
//!
//! Every failure here is a deterministic, input-validation style failure:
//! it is detected before or during the single pass over a corpus, surfaced
//! to the caller, and never retried. Divisions that the estimation formulas
//! leave undefined (empty corpora, words with zero overall frequency, test
//! sets without spam) map to explicit variants instead of producing NaN.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by corpus loading, splitting, training and evaluation.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// An input corpus file does not exist.
    #[error("corpus file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// An I/O failure other than a missing input file.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus holds no labeled messages, so the spam ratio is undefined.
    #[error("corpus {} contains no labeled messages", .path.display())]
    EmptyCorpus { path: PathBuf },

    /// A frequency computation was asked to run over zero documents.
    #[error("cannot compute document frequencies over an empty document set")]
    EmptyDocumentSet,

    /// A vocabulary word never occurs in any labeled message, so its
    /// spamicity ratio is undefined.
    #[error("word {word:?} does not occur in any labeled message")]
    UndefinedSpamicity { word: String },

    /// The test corpus holds no spam messages, so recall is undefined.
    #[error("test corpus {} contains no spam messages", .path.display())]
    NoSpamMessages { path: PathBuf },

    /// A configuration file exists but cannot be parsed.
    #[error("invalid configuration in {}: {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ClassifierError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
