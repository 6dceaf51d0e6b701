//! A console blackjack table with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays full rounds for one to seven
//! players against a dealer: the initial deal, player hit loops, the dealer's
//! draw, settlement and cleanup. All input and output goes through a
//! [`Console`], so the same table runs on a terminal or in tests.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Game, StdConsole, TableOptions};
//!
//! let mut game = Game::new(["Ann"], TableOptions::default(), 42).unwrap();
//! let result = game.play(&mut StdConsole);
//! let _ = result;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::StdConsole;
pub use console::{Announcement, Console};
pub use deck::Deck;
pub use error::{DealError, FlipError, SetupError};
pub use game::{Game, RoundPhase};
pub use hand::{BLACKJACK, Hand};
pub use options::{ReshufflePolicy, TableOptions};
pub use player::{Dealer, Participant, Player};
pub use result::{Outcome, PlayerResult, RoundResult};
