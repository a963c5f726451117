//! # smsbayes — Naive Bayes SMS spam classifier
//!
//! Frequency-based spam classification for short text messages, built for
//! small-scale experimentation: tokenize a labeled corpus into a shared
//! vocabulary, estimate per-word spamicity ratios, score raw messages, and
//! evaluate a decision rule with recall and precision.
//!
//! The estimator is deliberately unsmoothed. Divisions that the formulas
//! leave undefined (empty corpora, words never seen in a labeled message,
//! test sets without spam) surface as typed errors instead of NaN.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use smsbayes::{evaluate_classifier, spam_score, train_model};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = train_model(Path::new("data/train"))?;
//!
//!     let score = spam_score(&model, "win a free prize now");
//!     println!("score = {:.3}", score);
//!
//!     let evaluation = evaluate_classifier(Path::new("data/test"), |sms| {
//!         spam_score(&model, sms) > 0.5
//!     })?;
//!     println!(
//!         "recall = {:.3}, precision = {:.3}",
//!         evaluation.recall, evaluation.precision
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Corpus format
//!
//! Plain text, one message per line: a `spam` or `ham` label token followed
//! by whitespace-separated words. Lines with any other leading token are
//! skipped as unlabeled.
//!
//! ## Module Structure
//!
//! - [`corpus`] - Corpus parsing and word indexing
//! - [`split`] - Seeded random partitioning into train/test files
//! - [`frequency`] - Document-frequency estimation
//! - [`train`] - Model training
//! - [`predict`] - Message scoring
//! - [`evaluate`] - Recall/precision evaluation
//! - [`config`] - TOML configuration
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluate;
pub mod frequency;
pub mod predict;
pub mod split;
pub mod train;

pub use corpus::{load_corpus, LabeledCorpus, Vocabulary};
pub use error::ClassifierError;
pub use evaluate::{evaluate_classifier, Evaluation};
pub use predict::spam_score;
pub use split::split_lines;
pub use train::{train_model, SpamModel};
