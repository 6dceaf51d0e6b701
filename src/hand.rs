//! Hands of cards and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Typical number of cards a seat holds before busting.
const HAND_CAPACITY: usize = 7;

/// Scores a run of cards.
///
/// A hand whose first card is face down has no visible score and reports 0,
/// whatever the other cards show. Otherwise every card is summed with aces at
/// 1, and a single flat 10 is added when an ace is present and the sum is at
/// most 11.
fn evaluate_cards(cards: &[Card]) -> u8 {
    match cards.first() {
        None => return 0,
        Some(first) if !first.is_face_up() => return 0,
        Some(_) => {}
    }

    let mut total: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        let value = card.value();
        if value == 1 {
            has_ace = true;
        }
        total = total.saturating_add(value);
    }

    if has_ace && total <= 11 {
        total += 10;
    }

    total
}

/// An ordered collection of cards owned by a seat or a deck.
///
/// Insertion order is deal order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(HAND_CAPACITY)
    }

    /// Creates an empty hand with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    /// Adds a card to the end of the hand, taking ownership of it.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Drops every card in the hand. Clearing an empty hand does nothing.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the hand total.
    ///
    /// Empty hands and hands whose first card is face down total 0.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Turns over the first card. Returns `false` if the hand is empty.
    pub(crate) fn flip_first(&mut self) -> bool {
        match self.cards.first_mut() {
            Some(card) => {
                card.flip();
                true
            }
            None => false,
        }
    }

    /// Removes and returns the last card.
    pub(crate) fn take_last(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
    /// Writes `(total)` followed by every card, tab separated, or `<empty>`.
    /// The total is left out while it reads 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("<empty>");
        }

        let total = self.total();
        if total != 0 {
            write!(f, "({total})\t")?;
        }

        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str("\t")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
