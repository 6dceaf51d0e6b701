//! Table configuration options.

extern crate alloc;

use alloc::string::String;

/// What happens to the deck between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ReshufflePolicy {
    /// Refill the deck to 52 cards and shuffle it after every round.
    #[default]
    EveryRound,
    /// Keep playing from the same deck until it runs out.
    Never,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{ReshufflePolicy, TableOptions};
///
/// let options = TableOptions::default()
///     .with_dealer_name("House")
///     .with_max_players(4)
///     .with_reshuffle(ReshufflePolicy::Never);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Name the dealer is displayed under.
    pub dealer_name: String,
    /// Maximum number of seated players (at least one is always required).
    pub max_players: u8,
    /// Total at which the dealer stops taking cards.
    pub dealer_stands_on: u8,
    /// Deck handling between rounds.
    pub reshuffle: ReshufflePolicy,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            dealer_name: String::from("Dealer"),
            max_players: 7,
            dealer_stands_on: 17,
            reshuffle: ReshufflePolicy::EveryRound,
        }
    }
}

impl TableOptions {
    /// Sets the dealer's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_name("House");
    /// assert_eq!(options.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_players(3);
    /// assert_eq!(options.max_players, 3);
    /// ```
    #[must_use]
    pub fn with_max_players(mut self, max_players: u8) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the deck handling between rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{ReshufflePolicy, TableOptions};
    ///
    /// let options = TableOptions::default().with_reshuffle(ReshufflePolicy::Never);
    /// assert_eq!(options.reshuffle, ReshufflePolicy::Never);
    /// ```
    #[must_use]
    pub fn with_reshuffle(mut self, policy: ReshufflePolicy) -> Self {
        self.reshuffle = policy;
        self
    }
}
