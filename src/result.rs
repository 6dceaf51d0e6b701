//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// How a player's hand finished against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player beat the dealer, or the dealer busted.
    Win,
    /// Dealer finished higher.
    Lose,
    /// Equal totals.
    Push,
    /// Player went over 21 during their turn.
    Bust,
}

/// Result for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The player's final total.
    pub total: u8,
    /// The outcome of the hand.
    pub outcome: Outcome,
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
}

impl RoundResult {
    /// Returns the result for the named player.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerResult> {
        self.players.iter().find(|result| result.name == name)
    }
}
