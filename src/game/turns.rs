use crate::console::Console;
use crate::player::Participant;

use super::{Game, RoundPhase};

impl Game {
    /// Lets each player draw, in seat order, until they stand or bust.
    pub(super) fn player_turns<C: Console + ?Sized>(&mut self, console: &mut C) {
        self.enter(RoundPhase::PlayerTurns);

        for player in &mut self.players {
            let drawn = self.deck.additional_cards(player, console);
            tracing::debug!(
                player = player.name(),
                drawn,
                total = player.hand().total(),
                "player turn finished"
            );
        }
    }
}
