use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyFitError {
    #[error("Corpus Error: could not read '{}': {source}", .path.display())]
    CorpusRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type KfResult<T> = Result<T, KeyFitError>;
