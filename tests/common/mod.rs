//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use bjtable::{Announcement, Card, Console, Deck, Game, Rank, Suit};

/// A console that replays canned answers and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub lines: Vec<String>,
    pub announcements: Vec<Announcement>,
}

impl ScriptedConsole {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|answer| (*answer).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn take_announcements(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.announcements)
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front()
    }

    fn announce(&mut self, announcement: &Announcement) {
        self.announcements.push(announcement.clone());
        self.write_line(&announcement.to_string());
    }
}

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Replaces the game's deck so cards come out in exactly `draws` order.
pub fn stack_deck(game: &mut Game, draws: Vec<Card>) {
    let mut deck = draws;
    deck.reverse();
    game.deck = Deck::from_cards(deck);
}
