use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SquareCheckError {
    #[error("repetition count must be at least 1")]
    ZeroRepetitions,
}
