//! Document-frequency estimation over encoded messages.

use std::collections::HashSet;

use crate::error::ClassifierError;

/// Fraction of documents containing each word at least once.
///
/// `num_words` fixes the length of the returned vector; every index in
/// `documents` must lie below it. Repeated occurrences of a word inside one
/// document count once: a document contributes to a word's counter when it
/// contains the word at all. Each entry of the result lies in [0, 1].
///
/// An empty document collection leaves the ratios undefined and returns
/// [`ClassifierError::EmptyDocumentSet`].
pub fn document_frequencies<'a, D>(
    num_words: usize,
    documents: D,
) -> Result<Vec<f64>, ClassifierError>
where
    D: IntoIterator<Item = &'a Vec<usize>>,
{
    let mut counts = vec![0usize; num_words];
    let mut total = 0usize;

    for document in documents {
        total += 1;
        let distinct: HashSet<usize> = document.iter().copied().collect();
        for word in distinct {
            counts[word] += 1;
        }
    }

    if total == 0 {
        return Err(ClassifierError::EmptyDocumentSet);
    }

    Ok(counts
        .into_iter()
        .map(|count| count as f64 / total as f64)
        .collect())
}
