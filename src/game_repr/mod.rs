mod board;
mod castling;
mod checks;
pub mod error;
mod legal;
mod moves;
mod piece;
mod position;
mod setup;
mod square;
mod piece_moves;
pub mod tables;

#[cfg(test)]
mod tests;

pub use board::*;
pub use castling::*;
pub use checks::*;
pub use error::EngineError;
pub use legal::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use setup::*;
pub use square::*;
