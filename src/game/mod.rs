//! Round orchestration.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::{ReshufflePolicy, TableOptions};
use crate::player::{Dealer, Participant, Player};
use crate::result::RoundResult;

mod deal;
mod dealer;
pub mod state;
mod turns;

pub use state::RoundPhase;

/// A blackjack table: one deck, one dealer and the seated players.
///
/// The table owns every card. Cards move from the deck into hands when dealt
/// and are dropped when hands are cleared at the end of a round.
#[derive(Debug)]
pub struct Game {
    /// Cards left to deal.
    pub deck: Deck,
    /// Table options, fixed once the table is seated.
    options: TableOptions,
    /// The house.
    dealer: Dealer,
    /// Players in seat order.
    players: Vec<Player>,
    /// Current round phase.
    phase: RoundPhase,
    /// Completed rounds.
    rounds_played: u32,
    /// Random number generator, seeded once per table.
    rng: ChaCha8Rng,
}

impl Game {
    /// Seats one player per name and shuffles a fresh deck using `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if no names are given or there are more names than
    /// `options.max_players`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, TableOptions};
    ///
    /// let game = Game::new(["Ann", "Bo"], TableOptions::default(), 42).unwrap();
    /// assert_eq!(game.players().len(), 2);
    /// assert_eq!(game.deck.len(), 52);
    /// ```
    pub fn new<I, S>(names: I, options: TableOptions, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();

        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if players.len() > usize::from(options.max_players) {
            return Err(SetupError::TooManyPlayers {
                count: players.len(),
                max: options.max_players,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let dealer = Dealer::with_stands_on(options.dealer_name.clone(), options.dealer_stands_on);

        tracing::debug!(players = players.len(), seed, "table seated");

        Ok(Self {
            deck,
            options,
            dealer,
            players,
            phase: RoundPhase::Idle,
            rounds_played: 0,
            rng,
        })
    }

    /// Plays one full round and returns how each player fared.
    ///
    /// Hands are shown and events announced on `console`; players are asked
    /// there whether they want more cards. Problems such as an empty deck are
    /// announced and the round carries on.
    pub fn play<C: Console + ?Sized>(&mut self, console: &mut C) -> RoundResult {
        self.deal_initial(console);
        self.hide_hole_card(console);
        self.reveal_hands(console);
        self.player_turns(console);
        self.reveal_hole_card(console);
        self.dealer_turn(console);
        let result = self.settle(console);
        self.cleanup();
        result
    }

    /// Clears every hand and, depending on the reshuffle policy, refills and
    /// shuffles the deck for the next round.
    fn cleanup(&mut self) {
        self.enter(RoundPhase::Cleanup);

        for player in &mut self.players {
            player.hand_mut().clear();
        }
        self.dealer.hand_mut().clear();

        match self.options.reshuffle {
            ReshufflePolicy::EveryRound => {
                self.deck.populate();
                self.deck.shuffle(&mut self.rng);
            }
            ReshufflePolicy::Never => {}
        }

        self.rounds_played += 1;
        self.enter(RoundPhase::Idle);
    }

    fn enter(&mut self, phase: RoundPhase) {
        tracing::debug!(?phase, round = self.rounds_played + 1, "round phase");
        self.phase = phase;
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the number of completed rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the options the table was seated with.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }
}
