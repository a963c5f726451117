//! Random line-level partitioning of a corpus into two files.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::corpus::open_corpus;
use crate::error::ClassifierError;

/// Distribute the lines of `input` between `first` and `second`.
///
/// Each line goes to `first` when a pseudo-random draw in [0, 1) falls
/// below `proba`, and to `second` otherwise. The generator is seeded with
/// `seed`, so the same seed and the same input produce exactly the same
/// partition; different seeds produce different ones. Output files are
/// created (or truncated) and flushed before returning.
pub fn split_lines(
    input: &Path,
    seed: u64,
    first: &Path,
    second: &Path,
    proba: f64,
) -> Result<(), ClassifierError> {
    let reader = BufReader::new(open_corpus(input)?);
    let mut first_out = BufWriter::new(create_output(first)?);
    let mut second_out = BufWriter::new(create_output(second)?);

    let mut rng = StdRng::seed_from_u64(seed);

    for line in reader.lines() {
        let line = line.map_err(|source| ClassifierError::io(input, source))?;
        if rng.gen::<f64>() < proba {
            writeln!(first_out, "{}", line).map_err(|source| ClassifierError::io(first, source))?;
        } else {
            writeln!(second_out, "{}", line)
                .map_err(|source| ClassifierError::io(second, source))?;
        }
    }

    first_out
        .flush()
        .map_err(|source| ClassifierError::io(first, source))?;
    second_out
        .flush()
        .map_err(|source| ClassifierError::io(second, source))?;

    Ok(())
}

fn create_output(path: &Path) -> Result<File, ClassifierError> {
    File::create(path).map_err(|source| ClassifierError::io(path, source))
}
