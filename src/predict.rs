//! Scoring raw messages against a trained model.

use std::collections::HashSet;

use crate::train::SpamModel;

/// Spam-likelihood score of `sms` under `model`.
///
/// The message is split on whitespace and reduced to its distinct words;
/// the score is the spam prior multiplied by the spamicity of every word
/// found in the vocabulary. Words outside the vocabulary contribute a
/// neutral factor of 1, so a message with no known words scores exactly
/// the prior. The result is an unnormalized likelihood, not a probability;
/// thresholding it into a spam/ham decision is the caller's policy.
pub fn spam_score(model: &SpamModel, sms: &str) -> f64 {
    let distinct: HashSet<&str> = sms.split_whitespace().collect();

    let mut score = 1.0;
    for word in distinct {
        if let Some(index) = model.vocabulary.index_of(word) {
            score *= model.spamicity[index];
        }
    }

    score * model.spam_ratio
}
