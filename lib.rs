//! Word frequency counting over a text file.
//!
//! Lines are tokenized into lower-cased words, counted either on one thread
//! or across the rayon pool, and the most frequent words are reported.

pub mod config;
pub mod error;
pub mod frequency;
pub mod input;
pub mod logging;
pub mod strategy;
pub mod tokenizer;
pub mod top_k;

use std::io::{self, Write};
use std::time::Instant;

use log::{debug, info, warn};

pub use config::Config;
pub use error::WordCountError;
pub use frequency::{FrequencyMap, SharedFrequencyMap};
pub use strategy::{Concurrent, ExecutionMode, MergePolicy, Sequential, Strategy};
pub use tokenizer::tokenize;
pub use top_k::{top_k, RankedEntry};

/// Count the configured file and write the report to `out`.
///
/// A file that cannot be read is reported on `out` and counted as empty;
/// the elapsed-time line is written either way. Only failures writing to
/// `out` are returned.
pub fn run<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    let start = Instant::now();
    info!("Counting {} ({:?})", config.input_path.display(), config.mode);

    let map = match input::read_lines(&config.input_path) {
        Ok(lines) => config.mode.strategy().aggregate(&lines),
        Err(e) => {
            match &e {
                WordCountError::Read { path, source } => {
                    warn!("Failed to read {}: {}", path.display(), source);
                }
            }
            writeln!(out, "{}", e)?;
            FrequencyMap::new()
        }
    };
    debug!("{} distinct words, {} in total", map.len(), map.total());

    for entry in top_k(&map, config.top_words) {
        writeln!(out, "{}", entry)?;
    }
    writeln!(out, "Executed in {} milliseconds", start.elapsed().as_millis())?;
    Ok(())
}
