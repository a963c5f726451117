//! Recall/precision evaluation of a spam decision function.

use std::path::Path;

use crate::corpus::load_corpus;
use crate::error::ClassifierError;
use crate::train::train_model;

/// Recall and precision of a decision function over a labeled test corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Fraction of spam messages that were flagged as spam.
    pub recall: f64,
    /// Fraction of flagged messages that are spam; 1.0 when nothing was
    /// flagged, since no prediction means no false positive.
    pub precision: f64,
}

/// Run `classify` over every message of the labeled corpus at `path`.
///
/// `classify` maps a raw message string to a spam verdict and is expected
/// to carry its own trained parameters. The evaluation pass first fits a
/// fresh model on the test corpus itself and discards it, then re-tokenizes
/// the corpus so each encoded message can be turned back into text before
/// being handed to `classify`; corpora the trainer rejects therefore fail
/// the evaluation as well.
///
/// Recall divides by the number of spam messages, so a corpus without spam
/// fails with [`ClassifierError::NoSpamMessages`] before any tally is made.
pub fn evaluate_classifier<F>(path: &Path, classify: F) -> Result<Evaluation, ClassifierError>
where
    F: Fn(&str) -> bool,
{
    train_model(path)?;
    let corpus = load_corpus(path)?;

    if corpus.spams.is_empty() {
        return Err(ClassifierError::NoSpamMessages {
            path: path.to_path_buf(),
        });
    }

    let mut flagged = 0usize;
    let mut hits = 0usize;

    for message in &corpus.spams {
        if classify(&corpus.message_text(message)) {
            flagged += 1;
            hits += 1;
        }
    }
    for message in &corpus.hams {
        if classify(&corpus.message_text(message)) {
            flagged += 1;
        }
    }

    let recall = hits as f64 / corpus.spams.len() as f64;
    let precision = if flagged == 0 {
        1.0
    } else {
        hits as f64 / flagged as f64
    };

    Ok(Evaluation { recall, precision })
}

/// Print an evaluation as percentages.
pub fn print_report(evaluation: &Evaluation) {
    println!("\nEvaluation results:");
    println!("  Recall    = {:.2}%", evaluation.recall * 100.0);
    println!("  Precision = {:.2}%", evaluation.precision * 100.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::spam_score;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EPSILON: f64 = 1e-9;

    fn corpus_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_always_true_classifier() {
        let file = corpus_file("spam buy now\nham hello friend\nspam buy cheap\n");
        let evaluation = evaluate_classifier(file.path(), |_| true).unwrap();

        assert!((evaluation.recall - 1.0).abs() < EPSILON);
        // Every message is flagged, so precision is the spam share.
        assert!((evaluation.precision - 2.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_always_false_classifier() {
        let file = corpus_file("spam buy now\nham hello friend\nspam buy cheap\n");
        let evaluation = evaluate_classifier(file.path(), |_| false).unwrap();

        assert_eq!(evaluation.recall, 0.0);
        // Nothing flagged: precision is 1.0 by convention.
        assert_eq!(evaluation.precision, 1.0);
    }

    #[test]
    fn test_threshold_classifier_on_example_corpus() {
        let file = corpus_file("spam buy now\nham hello friend\nspam buy cheap\n");
        let model = train_model(file.path()).unwrap();
        let evaluation =
            evaluate_classifier(file.path(), |sms| spam_score(&model, sms) > 0.5).unwrap();

        // Both spam messages score (2/3) * 1.5 * 1.5 = 1.5 > 0.5; the ham
        // message contains only zero-spamicity words and scores 0.
        assert!((evaluation.recall - 1.0).abs() < EPSILON);
        assert!((evaluation.precision - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_corpus_without_spam_is_rejected() {
        let file = corpus_file("ham hello friend\nham see you soon\n");
        let err = evaluate_classifier(file.path(), |_| true).unwrap_err();
        // The training pass over the test corpus fails before the recall
        // guard is reached: there are no spam documents to estimate from.
        assert!(matches!(err, ClassifierError::EmptyDocumentSet));
    }

    #[test]
    fn test_missing_corpus_error() {
        let err = evaluate_classifier(Path::new("no/such/test"), |_| true).unwrap_err();
        assert!(matches!(err, ClassifierError::MissingFile { .. }));
    }
}
