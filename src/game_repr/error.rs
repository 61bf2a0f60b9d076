//! Error types for rejected caller requests.

use thiserror::Error;

use super::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move: {notation}")]
    IllegalMove { notation: String },

    #[error("promotion move {notation} needs a promotion piece")]
    MissingPromotion { notation: String },

    #[error("move {notation} is not a promotion but a promotion piece was given")]
    UnexpectedPromotion { notation: String },

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("no {0} king on the board")]
    MissingKing(Color),

    #[error("more than one {0} king on the board")]
    DuplicateKing(Color),
}

pub type Result<T> = std::result::Result<T, EngineError>;
