//! Parameter estimation from a labeled corpus.

use std::path::Path;

use crate::corpus::{load_corpus, Vocabulary};
use crate::error::ClassifierError;
use crate::frequency::document_frequencies;

/// Parameters estimated from one labeled corpus.
///
/// `spamicity[i]` is the fraction of spam messages containing word `i`
/// divided by the fraction of all messages containing it; values above 1.0
/// mark words that lean toward spam. The model is immutable: it is built in
/// a single training pass and never updated afterwards.
#[derive(Debug, Clone)]
pub struct SpamModel {
    /// Fraction of labeled messages that are spam.
    pub spam_ratio: f64,
    /// Word index the model was built against.
    pub vocabulary: Vocabulary,
    /// Per-word spam affinity, indexed by vocabulary index.
    pub spamicity: Vec<f64>,
}

/// Estimate a [`SpamModel`] from the labeled corpus at `path`.
///
/// Runs the tokenizing scan, computes the document frequencies of every
/// word over the spam messages and over all messages, and combines them
/// into the spamicity ratios. No smoothing is applied: a word's overall
/// frequency of zero (possible only for words seen on unlabeled lines)
/// makes its ratio undefined and fails with
/// [`ClassifierError::UndefinedSpamicity`].
pub fn train_model(path: &Path) -> Result<SpamModel, ClassifierError> {
    let corpus = load_corpus(path)?;

    if corpus.is_empty() {
        return Err(ClassifierError::EmptyCorpus {
            path: path.to_path_buf(),
        });
    }

    let num_words = corpus.vocabulary.len();
    let spam_freq = document_frequencies(num_words, &corpus.spams)?;
    let overall_freq =
        document_frequencies(num_words, corpus.hams.iter().chain(corpus.spams.iter()))?;

    let mut spamicity = Vec::with_capacity(num_words);
    for (index, (&spam, &overall)) in spam_freq.iter().zip(overall_freq.iter()).enumerate() {
        if overall == 0.0 {
            return Err(ClassifierError::UndefinedSpamicity {
                word: corpus.vocabulary.word_at(index).to_string(),
            });
        }
        spamicity.push(spam / overall);
    }

    let spam_ratio = corpus.spams.len() as f64 / corpus.len() as f64;

    Ok(SpamModel {
        spam_ratio,
        vocabulary: corpus.vocabulary,
        spamicity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EPSILON: f64 = 1e-9;

    fn corpus_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_example_corpus_parameters() {
        let file = corpus_file("spam buy now\nham hello friend\nspam buy cheap\n");
        let model = train_model(file.path()).unwrap();

        assert!((model.spam_ratio - 2.0 / 3.0).abs() < EPSILON);
        assert_eq!(model.vocabulary.len(), 5);

        // spamicity = F_spam / F_all, e.g. "buy": 1.0 / (2/3) = 1.5.
        assert!((model.spamicity[0] - 1.5).abs() < EPSILON);
        // "now" and "cheap": 0.5 / (1/3) = 1.5.
        assert!((model.spamicity[1] - 1.5).abs() < EPSILON);
        assert!((model.spamicity[4] - 1.5).abs() < EPSILON);
        // Ham-only words: 0 / (1/3) = 0.
        assert_eq!(model.spamicity[2], 0.0);
        assert_eq!(model.spamicity[3], 0.0);
    }

    #[test]
    fn test_training_is_idempotent() {
        let file = corpus_file("spam win prize now\nham see you at lunch\nspam win cash\n");
        let first = train_model(file.path()).unwrap();
        let second = train_model(file.path()).unwrap();

        assert_eq!(first.spam_ratio.to_bits(), second.spam_ratio.to_bits());
        assert_eq!(first.vocabulary, second.vocabulary);
        let first_bits: Vec<u64> = first.spamicity.iter().map(|s| s.to_bits()).collect();
        let second_bits: Vec<u64> = second.spamicity.iter().map(|s| s.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_empty_corpus_error() {
        let file = corpus_file("");
        let err = train_model(file.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyCorpus { .. }));
    }

    #[test]
    fn test_unlabeled_only_corpus_is_empty() {
        let file = corpus_file("note this is not labeled\n");
        let err = train_model(file.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyCorpus { .. }));
    }

    #[test]
    fn test_corpus_without_spam_fails_frequency_pass() {
        let file = corpus_file("ham hello friend\nham see you soon\n");
        let err = train_model(file.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyDocumentSet));
    }

    #[test]
    fn test_word_only_on_unlabeled_line_is_rejected() {
        let file = corpus_file("bogus orphan\nspam buy now\nham hello\n");
        let err = train_model(file.path()).unwrap_err();
        match err {
            ClassifierError::UndefinedSpamicity { word } => assert_eq!(word, "orphan"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_corpus_error() {
        let err = train_model(Path::new("no/such/train")).unwrap_err();
        assert!(matches!(err, ClassifierError::MissingFile { .. }));
    }
}
