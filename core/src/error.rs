use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index")]
    InvalidIndex,
    #[error("Round is still being played, nothing to conclude")]
    NothingToConclude,
}

pub type Result<T> = core::result::Result<T, GameError>;
