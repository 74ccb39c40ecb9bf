use crate::input::LoadError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContrarianError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File is empty: {0}")]
    EmptyFile(String),

    #[error("Sentence source failed: {0}")]
    Load(#[from] LoadError),
}
