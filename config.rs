use std::path::PathBuf;

use crate::strategy::ExecutionMode;

pub const TOP_WORDS: usize = 10;
pub const FILENAME: &str = "tempest.txt";
pub const PARALLEL_ARG: &str = "parallel";
pub const ERROR_CANNOT_BE_READ: &str = "File cannot be read";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub top_words: usize,
    pub mode: ExecutionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(FILENAME),
            top_words: TOP_WORDS,
            mode: ExecutionMode::Sequential,
        }
    }
}

impl Config {
    /// Build from the process arguments, program name first.
    ///
    /// Only the first argument is looked at: `parallel` selects concurrent
    /// counting, anything else keeps the sequential default.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mode = match args.into_iter().nth(1) {
            Some(arg) if arg.as_ref() == PARALLEL_ARG => ExecutionMode::Concurrent,
            _ => ExecutionMode::Sequential,
        };
        Self {
            mode,
            ..Self::default()
        }
    }
}
