//! Round phase types.

/// Where the table is within a round.
///
/// Phases run strictly in declaration order; a finished round returns to
/// [`RoundPhase::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Between rounds.
    #[default]
    Idle,
    /// Two passes of one card per player, then one to the dealer.
    InitialDeal,
    /// Dealer's first card is turned face down.
    HideHoleCard,
    /// Every hand is shown.
    RevealHands,
    /// Each player draws until they stand or bust.
    PlayerTurns,
    /// Dealer's first card is turned face up again.
    RevealHoleCard,
    /// Dealer draws by rule.
    DealerTurn,
    /// Players are compared with the dealer.
    Settlement,
    /// Hands are cleared.
    Cleanup,
}
