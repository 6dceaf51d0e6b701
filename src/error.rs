//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck has run out of cards.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when turning over the dealer's first card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// The dealer holds no cards.
    #[error("no cards to flip")]
    NoCards,
}

/// Errors that can occur when seating a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No player names were given.
    #[error("at least one player is required")]
    NoPlayers,
    /// More players than the table seats.
    #[error("{count} players requested but the table seats at most {max}")]
    TooManyPlayers {
        /// Number of players requested.
        count: usize,
        /// Seats available.
        max: u8,
    },
}
