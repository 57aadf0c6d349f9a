use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ERROR_CANNOT_BE_READ;

#[derive(Debug, Error)]
pub enum WordCountError {
    /// Missing file, permission problem, invalid UTF-8 or any other I/O failure.
    #[error("{}", ERROR_CANNOT_BE_READ)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
