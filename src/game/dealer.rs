use alloc::string::String;
use alloc::vec::Vec;

use crate::console::Console;
use crate::player::Participant;
use crate::result::{Outcome, PlayerResult, RoundResult};

use super::{Game, RoundPhase};

impl Game {
    /// Turns the dealer's first card face up again and shows the dealer's hand.
    pub(super) fn reveal_hole_card<C: Console + ?Sized>(&mut self, console: &mut C) {
        self.enter(RoundPhase::RevealHoleCard);
        self.flip_hole_card(console);
        console.write_line(&alloc::format!("{}", self.dealer));
    }

    /// Dealer draws until reaching the configured stand total or busting.
    pub(super) fn dealer_turn<C: Console + ?Sized>(&mut self, console: &mut C) {
        self.enter(RoundPhase::DealerTurn);

        let drawn = self.deck.additional_cards(&mut self.dealer, console);
        tracing::debug!(drawn, total = self.dealer.hand().total(), "dealer turn finished");
    }

    /// Compares every player with the dealer and announces the outcomes.
    ///
    /// If the dealer busted, every player still standing wins. Otherwise a
    /// higher total wins, a lower one loses and equal totals push. Players who
    /// busted get no announcement here; they were told during their turn.
    pub(super) fn settle<C: Console + ?Sized>(&mut self, console: &mut C) -> RoundResult {
        self.enter(RoundPhase::Settlement);

        let dealer_total = self.dealer.hand().total();
        let dealer_bust = self.dealer.is_boosted();

        let mut players = Vec::with_capacity(self.players.len());

        for player in &self.players {
            let total = player.hand().total();

            let outcome = if player.is_boosted() {
                Outcome::Bust
            } else if dealer_bust || total > dealer_total {
                player.win(console);
                Outcome::Win
            } else if total < dealer_total {
                player.lose(console);
                Outcome::Lose
            } else {
                player.push(console);
                Outcome::Push
            };

            players.push(PlayerResult {
                name: String::from(player.name()),
                total,
                outcome,
            });
        }

        let result = RoundResult {
            round: self.rounds_played + 1,
            dealer_total,
            dealer_bust,
            players,
        };

        let outcomes: Vec<(&str, Outcome)> = result
            .players
            .iter()
            .map(|player| (player.name.as_str(), player.outcome))
            .collect();
        tracing::info!(round = result.round, dealer_total, dealer_bust, ?outcomes, "round settled");

        result
    }
}
