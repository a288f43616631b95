use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the command line front end. The word set itself never fails.
#[derive(Error, Debug)]
pub enum SortError {
    /// Anything other than exactly one input string was given.
    #[error("invalid number of arguments ({0}) provided")]
    ArgumentCount(usize),

    #[error("cannot open output file {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write sorted words")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;
