//! Command-line interface for the spam classifier.

use std::error::Error;
use std::path::Path;

use crate::config::Config;
use crate::evaluate::{evaluate_classifier, print_report};
use crate::predict::spam_score;
use crate::split::split_lines;
use crate::train::{train_model, SpamModel};

/// Print command-line usage information.
pub fn print_usage() {
    println!("Usage:");
    println!("  smsbayes [COMMAND] [OPTIONS]\n");
    println!("Commands:");
    println!("  run                Split the corpus, train, evaluate (default)");
    println!("  split              Partition the corpus into train/test files");
    println!("  train              Train on the training partition, print statistics");
    println!("  predict TEXT       Score a single message against the trained model");
    println!("  eval               Evaluate the classifier on the test partition");
    println!("  help               Show this help\n");
    println!("Configuration is read from config.toml when present; defaults");
    println!("match the reference experiment (seed 1234, 60/40 split).");
}

/// Main entry point for the classifier CLI.
///
/// # Arguments
///
/// * `args` - Command-line arguments (including program name)
pub fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let config = Config::load(Path::new("config.toml")).unwrap_or_default();

    let command = if args.len() > 1 { args[1].as_str() } else { "run" };

    match command {
        "run" => run_pipeline(&config),
        "split" => split_corpus(&config),
        "train" => {
            let model = train_model(Path::new(&config.data.train_path))?;
            print_training_stats(&model);
            Ok(())
        }
        "predict" => {
            if args.len() < 3 {
                println!("Error: TEXT argument required\n");
                print_usage();
                return Ok(());
            }
            predict_message(&config, &args[2])
        }
        "eval" => evaluate_partitions(&config),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            println!("Unknown command: {}\n", command);
            print_usage();
            Ok(())
        }
    }
}

/// Full pipeline: split the corpus, train on one partition, evaluate the
/// thresholded classifier on the other.
fn run_pipeline(config: &Config) -> Result<(), Box<dyn Error>> {
    split_corpus(config)?;

    let model = train_model(Path::new(&config.data.train_path))?;
    print_training_stats(&model);

    let threshold = config.classifier.spam_threshold;
    let evaluation = evaluate_classifier(Path::new(&config.data.test_path), |sms| {
        spam_score(&model, sms) > threshold
    })?;
    print_report(&evaluation);

    Ok(())
}

fn split_corpus(config: &Config) -> Result<(), Box<dyn Error>> {
    let data = &config.data;
    println!(
        "Splitting {} (seed {}, p = {})...",
        data.corpus_path, data.split_seed, data.split_probability
    );
    split_lines(
        Path::new(&data.corpus_path),
        data.split_seed,
        Path::new(&data.train_path),
        Path::new(&data.test_path),
        data.split_probability,
    )?;
    println!("  Train partition: {}", data.train_path);
    println!("  Test partition:  {}\n", data.test_path);
    Ok(())
}

fn predict_message(config: &Config, text: &str) -> Result<(), Box<dyn Error>> {
    let model = train_model(Path::new(&config.data.train_path))?;
    let score = spam_score(&model, text);
    let verdict = if score > config.classifier.spam_threshold {
        "spam"
    } else {
        "ham"
    };

    println!("Message: {}", text);
    println!("Score:   {:.4}", score);
    println!("Verdict: {}", verdict);
    Ok(())
}

fn evaluate_partitions(config: &Config) -> Result<(), Box<dyn Error>> {
    let model = train_model(Path::new(&config.data.train_path))?;
    print_training_stats(&model);

    let threshold = config.classifier.spam_threshold;
    let evaluation = evaluate_classifier(Path::new(&config.data.test_path), |sms| {
        spam_score(&model, sms) > threshold
    })?;
    print_report(&evaluation);
    Ok(())
}

fn print_training_stats(model: &SpamModel) {
    println!("=== Training Statistics ===");
    println!("Vocabulary size: {}", model.vocabulary.len());
    println!("Prior P(spam): {:.3}", model.spam_ratio);
    println!("Prior P(ham): {:.3}", 1.0 - model.spam_ratio);
    println!("===========================");
}
