//! Corpus parsing and word indexing.
//!
//! A corpus is a plain-text file with one message per line. The first
//! whitespace token of a line is its label; every later token is a message
//! word. Lines labeled `spam` or `ham` become encoded messages in the
//! matching collection. Lines with any other label are not recorded as
//! messages, although the words they carry still enter the vocabulary.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::ClassifierError;

/// Label token marking a line as spam.
pub const LABEL_SPAM: &str = "spam";
/// Label token marking a line as ham.
pub const LABEL_HAM: &str = "ham";

/// Word index assigned densely in first-seen order over a single corpus.
///
/// A vocabulary belongs to the corpus scan that produced it: indices are not
/// stable across corpora or across different input orders, and vocabularies
/// from different scans are never merged. The inverse mapping (index → word)
/// is kept alongside the forward one and is read-only derived data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    indices: HashMap<String, usize>,
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Number of distinct words indexed so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Index of `word`, if it has been seen.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.indices.get(word).copied()
    }

    /// The word stored at `index`.
    ///
    /// Panics if `index` was not assigned by this vocabulary; encoded
    /// messages produced by the same corpus scan always stay in range.
    pub fn word_at(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Iterate `(word, index)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words.iter().enumerate().map(|(i, w)| (w.as_str(), i))
    }

    /// Index of `word`, assigning the next dense index on first sight.
    fn get_or_insert(&mut self, word: &str) -> usize {
        if let Some(index) = self.index_of(word) {
            return index;
        }
        let index = self.words.len();
        self.indices.insert(word.to_string(), index);
        self.words.push(word.to_string());
        index
    }
}

/// A tokenized corpus: the shared vocabulary plus the spam and ham messages,
/// each message encoded as a sequence of word indices in occurrence order.
#[derive(Debug, Clone)]
pub struct LabeledCorpus {
    pub vocabulary: Vocabulary,
    pub spams: Vec<Vec<usize>>,
    pub hams: Vec<Vec<usize>>,
}

impl LabeledCorpus {
    /// Total number of labeled messages.
    pub fn len(&self) -> usize {
        self.spams.len() + self.hams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spams.is_empty() && self.hams.is_empty()
    }

    /// Reconstruct the text of an encoded message, words joined by spaces.
    pub fn message_text(&self, message: &[usize]) -> String {
        message
            .iter()
            .map(|&index| self.vocabulary.word_at(index))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parse the corpus at `path` into a vocabulary and encoded messages.
///
/// The scan is a single left-to-right pass: word indices are assigned in
/// file order, and each line's first token switches how the rest of the
/// line is recorded. The file handle is released when the scan finishes,
/// including on the error paths.
pub fn load_corpus(path: &Path) -> Result<LabeledCorpus, ClassifierError> {
    let reader = BufReader::new(open_corpus(path)?);

    let mut vocabulary = Vocabulary::new();
    let mut spams = Vec::new();
    let mut hams = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| ClassifierError::io(path, source))?;
        let mut tokens = line.split_whitespace();
        let label = match tokens.next() {
            Some(label) => label,
            None => continue,
        };

        let encoded: Vec<usize> = tokens.map(|word| vocabulary.get_or_insert(word)).collect();

        match label {
            LABEL_SPAM => spams.push(encoded),
            LABEL_HAM => hams.push(encoded),
            // Unlabeled line: no message recorded, words stay indexed.
            _ => {}
        }
    }

    Ok(LabeledCorpus {
        vocabulary,
        spams,
        hams,
    })
}

/// Open a corpus file, mapping the absent-file case to its own error kind.
pub(crate) fn open_corpus(path: &Path) -> Result<File, ClassifierError> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ClassifierError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => ClassifierError::io(path, source),
    })
}
