//! Seats at the table: human players and the dealer.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::console::{Announcement, Console, ask_yes_no};
use crate::error::FlipError;
use crate::hand::Hand;

/// Something seated at the table that holds a hand and decides whether to
/// take another card.
pub trait Participant: fmt::Display {
    /// Returns the seat's name.
    fn name(&self) -> &str;

    /// Returns the seat's hand.
    fn hand(&self) -> &Hand;

    /// Returns the seat's hand for dealing into.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Decides whether to take another card.
    fn is_hitting<C: Console + ?Sized>(&self, console: &mut C) -> bool;

    /// Returns whether the hand is over 21.
    fn is_boosted(&self) -> bool {
        self.hand().is_bust()
    }

    /// Announces that this seat went over 21. Changes nothing.
    fn bust<C: Console + ?Sized>(&self, console: &mut C) {
        console.announce(&Announcement::Bust(String::from(self.name())));
    }
}

fn fmt_seat(f: &mut fmt::Formatter<'_>, name: &str, hand: &Hand) -> fmt::Result {
    write!(f, "{name}:\t{hand}")
}

/// A human player who is asked before every extra card.
#[derive(Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Seats a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Announces a win.
    pub fn win<C: Console + ?Sized>(&self, console: &mut C) {
        console.announce(&Announcement::Win(self.name.clone()));
    }

    /// Announces a loss.
    pub fn lose<C: Console + ?Sized>(&self, console: &mut C) {
        console.announce(&Announcement::Lose(self.name.clone()));
    }

    /// Announces a tie with the dealer.
    pub fn push<C: Console + ?Sized>(&self, console: &mut C) {
        console.announce(&Announcement::Push(self.name.clone()));
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn is_hitting<C: Console + ?Sized>(&self, console: &mut C) -> bool {
        let prompt = format!("{}, do you want another card? (Y/N): ", self.name);
        ask_yes_no(console, &prompt)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_seat(f, &self.name, &self.hand)
    }
}

/// The house. Draws by a fixed rule instead of asking anyone.
#[derive(Debug, PartialEq, Eq)]
pub struct Dealer {
    name: String,
    hand: Hand,
    stands_on: u8,
}

impl Dealer {
    /// Total the dealer stands on unless configured otherwise.
    pub const STANDS_ON: u8 = 17;

    /// Seats a dealer that hits on 16 and stands on 17.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stands_on(name, Self::STANDS_ON)
    }

    /// Seats a dealer that stands once the total reaches `stands_on`.
    #[must_use]
    pub fn with_stands_on(name: impl Into<String>, stands_on: u8) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            stands_on,
        }
    }

    /// Turns over the first card dealt to the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`FlipError::NoCards`] if the dealer holds no cards.
    pub fn flip_first_card(&mut self) -> Result<(), FlipError> {
        if self.hand.flip_first() {
            Ok(())
        } else {
            Err(FlipError::NoCards)
        }
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn is_hitting<C: Console + ?Sized>(&self, _console: &mut C) -> bool {
        self.hand.total() < self.stands_on
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_seat(f, &self.name, &self.hand)
    }
}
