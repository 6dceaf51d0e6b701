use crate::console::{Announcement, Console};
use crate::deck::Deck;
use crate::hand::Hand;
use crate::player::Participant;

use super::{Game, RoundPhase};

/// Deals one card, announcing a shortage instead of failing.
fn deal_or_announce<C: Console + ?Sized>(deck: &mut Deck, hand: &mut Hand, console: &mut C) {
    if let Err(err) = deck.deal(hand) {
        tracing::warn!(%err, "deal skipped");
        console.announce(&Announcement::NoCardsLeft);
    }
}

impl Game {
    /// Deals two passes: one card to every player in seat order, then one to
    /// the dealer.
    pub(super) fn deal_initial<C: Console + ?Sized>(&mut self, console: &mut C) {
        self.enter(RoundPhase::InitialDeal);

        for _ in 0..2 {
            for player in &mut self.players {
                deal_or_announce(&mut self.deck, player.hand_mut(), console);
            }
            deal_or_announce(&mut self.deck, self.dealer.hand_mut(), console);
        }
    }

    /// Turns the dealer's first card face down.
    pub(super) fn hide_hole_card<C: Console + ?Sized>(&mut self, console: &mut C) {
        self.enter(RoundPhase::HideHoleCard);
        self.flip_hole_card(console);
    }

    /// Shows every player's hand, then the dealer's.
    pub(super) fn reveal_hands<C: Console + ?Sized>(&mut self, console: &mut C) {
        self.enter(RoundPhase::RevealHands);

        for player in &self.players {
            console.write_line(&alloc::format!("{player}"));
        }
        console.write_line(&alloc::format!("{}", self.dealer));
    }

    pub(super) fn flip_hole_card<C: Console + ?Sized>(&mut self, console: &mut C) {
        if let Err(err) = self.dealer.flip_first_card() {
            tracing::warn!(%err, "hole card not flipped");
            console.announce(&Announcement::NoCardsToFlip);
        }
    }
}
