//! Play blackjack at the terminal.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bjtable::console::{self, Announcement, Console, StdConsole};
use bjtable::{Game, ReshufflePolicy, TableOptions};

/// Command line options.
#[derive(Debug, Parser)]
#[command(name = "bjtable", version, about = "Console blackjack for 1 to 7 players")]
struct Cli {
    /// Seed for the shuffle. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep dealing from the same deck across rounds instead of refilling it.
    #[arg(long)]
    keep_deck: bool,

    /// Name shown for the dealer.
    #[arg(long, default_value = "Dealer")]
    dealer_name: String,

    /// Log every round phase to stderr.
    #[arg(long)]
    debug: bool,
}

/// Seeds from the wall clock at nanosecond resolution, so two tables started
/// within the same second still shuffle differently.
fn clock_seed() -> u64 {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug { "debug" } else { "bjtable=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.debug)
        .init();

    let seed = cli.seed.unwrap_or_else(clock_seed);

    let reshuffle = if cli.keep_deck {
        ReshufflePolicy::Never
    } else {
        ReshufflePolicy::EveryRound
    };
    let options = TableOptions::default()
        .with_dealer_name(cli.dealer_name)
        .with_reshuffle(reshuffle);

    let mut terminal = StdConsole;
    terminal.announce(&Announcement::Welcome);
    terminal.write_line("");

    let Some(count) = console::ask_player_count(&mut terminal, options.max_players) else {
        return Ok(());
    };
    let Some(names) = console::ask_names(&mut terminal, count) else {
        return Ok(());
    };
    terminal.write_line("");

    let mut game = Game::new(names, options, seed).context("seating the table")?;
    tracing::info!(seed, players = count, "starting table");

    loop {
        game.play(&mut terminal);
        terminal.write_line("");
        if !console::ask_yes_no(&mut terminal, "Do you want to play again? (Y/N): ") {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::clock_seed;

    #[test]
    fn clock_seeds_differ_within_one_second() {
        let first = clock_seed();
        std::thread::sleep(Duration::from_millis(2));
        let second = clock_seed();

        assert_ne!(first, second);
        assert!(first > u64::from(u32::MAX));
    }
}
