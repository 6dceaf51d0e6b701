//! The card supply the table deals from.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::console::{Announcement, Console};
use crate::error::DealError;
use crate::hand::Hand;
use crate::player::Participant;

/// A 52-card deck. Cards are dealt from the end.
#[derive(Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Hand,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Hand::with_capacity(DECK_SIZE),
        };
        deck.populate();
        deck
    }

    /// Creates a deck holding exactly `cards`. The last card is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: Hand::from(cards),
        }
    }

    /// Discards whatever is left and refills the deck with one face-up card
    /// for every suit and rank.
    pub fn populate(&mut self) {
        self.cards.clear();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                self.cards.add(Card::new(rank, suit));
            }
        }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.cards_mut().shuffle(rng);
    }

    /// Moves one card from the deck into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Empty`] if the deck has no cards; `target` is left
    /// untouched.
    pub fn deal(&mut self, target: &mut Hand) -> Result<(), DealError> {
        let card = self.cards.take_last().ok_or(DealError::Empty)?;
        tracing::trace!(%card, remaining = self.cards.len(), "dealt card");
        target.add(card);
        Ok(())
    }

    /// Deals to `participant` for as long as they are not bust and still want
    /// cards, showing the hand after every card.
    ///
    /// Busting is announced once, on the card that caused it. If the deck runs
    /// out the shortage is announced and the participant stops drawing.
    ///
    /// Returns the number of cards dealt.
    pub fn additional_cards<P, C>(&mut self, participant: &mut P, console: &mut C) -> usize
    where
        P: Participant,
        C: Console + ?Sized,
    {
        let mut dealt = 0;

        while !participant.is_boosted() && participant.is_hitting(console) {
            if let Err(err) = self.deal(participant.hand_mut()) {
                tracing::warn!(seat = participant.name(), %err, "hit loop stopped");
                console.announce(&Announcement::NoCardsLeft);
                break;
            }
            dealt += 1;
            console.write_line(&alloc::format!("{participant}"));

            if participant.is_boosted() {
                participant.bust(console);
            }
        }

        dealt
    }

    /// Returns the cards left, in deal-last order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
