//! Console input and output used by the table.
//!
//! The game never touches stdin or stdout directly. Everything it prints goes
//! through [`Console::write_line`] or [`Console::announce`], and every
//! decision it asks a person for comes back through [`Console::read_char`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A table event shown to the players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// Banner shown once at start-up.
    Welcome,
    /// The named seat went over 21.
    Bust(String),
    /// The named player beat the dealer.
    Win(String),
    /// The named player lost to the dealer.
    Lose(String),
    /// The named player tied the dealer.
    Push(String),
    /// A deal was attempted from an empty deck.
    NoCardsLeft,
    /// The dealer's first card was flipped while the dealer held nothing.
    NoCardsToFlip,
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => f.write_str("Welcome to Blackjack!"),
            Self::Bust(name) => write!(f, "{name} busts."),
            Self::Win(name) => write!(f, "{name} wins."),
            Self::Lose(name) => write!(f, "{name} loses."),
            Self::Push(name) => write!(f, "{name} pushes."),
            Self::NoCardsLeft => f.write_str("Out of cards. Unable to deal."),
            Self::NoCardsToFlip => f.write_str("No cards to flip!"),
        }
    }
}

/// Line-based input and output for a table.
pub trait Console {
    /// Writes one line of output.
    fn write_line(&mut self, line: &str);

    /// Shows `prompt` and reads one line. Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Shows `prompt` and reads a single character answer.
    ///
    /// The default takes the first non-blank character of the next line.
    fn read_char(&mut self, prompt: &str) -> Option<char> {
        self.read_line(prompt).and_then(|line| line.trim().chars().next())
    }

    /// Reports a table event.
    fn announce(&mut self, announcement: &Announcement) {
        self.write_line(&alloc::format!("{announcement}"));
    }
}

/// Returns whether an answer means "yes". Only `y` and `Y` do.
#[must_use]
pub const fn is_affirmative(answer: Option<char>) -> bool {
    matches!(answer, Some('y' | 'Y'))
}

/// Asks a yes/no question. Anything but `y`/`Y`, including no input, is "no".
pub fn ask_yes_no<C: Console + ?Sized>(console: &mut C, prompt: &str) -> bool {
    is_affirmative(console.read_char(prompt))
}

/// Asks how many players are seated, re-prompting until the answer is in
/// `1..=max`. Returns `None` if input ends first.
pub fn ask_player_count<C: Console + ?Sized>(console: &mut C, max: u8) -> Option<u8> {
    let prompt = alloc::format!("How many players? (1 - {max}): ");
    loop {
        let line = console.read_line(&prompt)?;
        match line.trim().parse::<u8>() {
            Ok(count) if (1..=max).contains(&count) => return Some(count),
            _ => {}
        }
    }
}

/// Asks for one name per player, re-prompting on blank input. Returns `None`
/// if input ends first.
pub fn ask_names<C: Console + ?Sized>(console: &mut C, count: u8) -> Option<Vec<String>> {
    let mut names = Vec::with_capacity(usize::from(count));
    for seat in 1..=count {
        let prompt = alloc::format!("Enter the name of player {seat}: ");
        loop {
            let line = console.read_line(&prompt)?;
            let name = line.trim();
            if !name.is_empty() {
                names.push(String::from(name));
                break;
            }
        }
    }
    Some(names)
}

/// A console on the process's stdin and stdout.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct StdConsole;

#[cfg(feature = "std")]
impl Console for StdConsole {
    fn write_line(&mut self, line: &str) {
        std::println!("{line}");
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        use std::io::{BufRead, Write};

        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "{prompt}");
        let _ = stdout.flush();
        drop(stdout);

        let mut input = String::new();
        match std::io::stdin().lock().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input),
        }
    }
}
