//! Game integration tests.

mod common;

use std::collections::HashSet;

use bjtable::{
    Announcement, Card, Game, Outcome, Participant, Rank, ReshufflePolicy, RoundPhase, SetupError,
    Suit, TableOptions,
};

use common::{ScriptedConsole, card, stack_deck};

fn keep_deck() -> TableOptions {
    TableOptions::default().with_reshuffle(ReshufflePolicy::Never)
}

fn order(cards: &[Card]) -> Vec<(Rank, Suit)> {
    cards.iter().map(|card| (card.rank(), card.suit())).collect()
}

#[test]
fn new_rejects_bad_player_counts() {
    let err = Game::new(Vec::<String>::new(), TableOptions::default(), 1).unwrap_err();
    assert_eq!(err, SetupError::NoPlayers);

    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let err = Game::new(names, TableOptions::default(), 1).unwrap_err();
    assert_eq!(err, SetupError::TooManyPlayers { count: 8, max: 7 });

    let err = Game::new(["a", "b"], TableOptions::default().with_max_players(1), 1).unwrap_err();
    assert_eq!(err, SetupError::TooManyPlayers { count: 2, max: 1 });
}

#[test]
fn new_seats_players_and_shuffles_full_deck() {
    let game = Game::new(["Ann", "Bo"], TableOptions::default(), 42).unwrap();

    let seated: Vec<&str> = game.players().iter().map(Participant::name).collect();
    assert_eq!(seated, ["Ann", "Bo"]);
    assert_eq!(game.dealer().name(), "Dealer");
    assert_eq!(game.deck.len(), 52);
    assert_eq!(game.phase(), RoundPhase::Idle);
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn same_seed_shuffles_the_same_way() {
    let first = Game::new(["Ann"], TableOptions::default(), 42).unwrap();
    let second = Game::new(["Ann"], TableOptions::default(), 42).unwrap();
    let other = Game::new(["Ann"], TableOptions::default(), 43).unwrap();

    assert_eq!(first.deck, second.deck);
    assert_ne!(first.deck, other.deck);
}

#[test]
fn settlement_pushes_wins_and_skips_busted_players() {
    let mut game = Game::new(["A", "B", "C"], keep_deck(), 1).unwrap();
    stack_deck(
        &mut game,
        vec![
            card(Rank::Ten, Suit::Clubs),     // A
            card(Rank::Ten, Suit::Diamonds),  // B
            card(Rank::Ace, Suit::Spades),    // C
            card(Rank::Ten, Suit::Hearts),    // dealer hole
            card(Rank::Two, Suit::Diamonds),  // A
            card(Rank::Queen, Suit::Hearts),  // B
            card(Rank::King, Suit::Diamonds), // C
            card(Rank::Jack, Suit::Clubs),    // dealer
            card(Rank::King, Suit::Spades),   // A hit
        ],
    );
    let mut console = ScriptedConsole::with_answers(&["y", "n", "n"]);

    let result = game.play(&mut console);

    assert_eq!(result.round, 1);
    assert_eq!(result.dealer_total, 20);
    assert!(!result.dealer_bust);

    let a = result.player("A").unwrap();
    assert_eq!((a.total, a.outcome), (22, Outcome::Bust));
    let b = result.player("B").unwrap();
    assert_eq!((b.total, b.outcome), (20, Outcome::Push));
    let c = result.player("C").unwrap();
    assert_eq!((c.total, c.outcome), (21, Outcome::Win));

    assert_eq!(
        console.announcements,
        vec![
            Announcement::Bust("A".to_string()),
            Announcement::Push("B".to_string()),
            Announcement::Win("C".to_string()),
        ]
    );

    assert_eq!(
        console.lines,
        [
            "A:\t(12)\t10♣\t2♦",
            "B:\t(20)\t10♦\tQ♥",
            "C:\t(21)\tA♠\tK♦",
            "Dealer:\tXX\tJ♣",
            "A:\t(22)\t10♣\t2♦\tK♠",
            "A busts.",
            "Dealer:\t(20)\t10♥\tJ♣",
            "B pushes.",
            "C wins.",
        ]
    );

    // A is not asked again once bust.
    assert_eq!(
        console.prompts,
        [
            "A, do you want another card? (Y/N): ",
            "B, do you want another card? (Y/N): ",
            "C, do you want another card? (Y/N): ",
        ]
    );
}

#[test]
fn dealer_bust_pays_every_standing_player() {
    let mut game = Game::new(["P", "Q"], keep_deck(), 1).unwrap();
    stack_deck(
        &mut game,
        vec![
            card(Rank::Ten, Suit::Clubs),    // P
            card(Rank::Nine, Suit::Diamonds), // Q
            card(Rank::Ten, Suit::Hearts),   // dealer hole
            card(Rank::Two, Suit::Diamonds), // P
            card(Rank::Five, Suit::Spades),  // Q
            card(Rank::Six, Suit::Clubs),    // dealer
            card(Rank::King, Suit::Hearts),  // Q hit
            card(Rank::Eight, Suit::Spades), // dealer hit
        ],
    );
    let mut console = ScriptedConsole::with_answers(&["n", "y"]);

    let result = game.play(&mut console);

    assert!(result.dealer_bust);
    assert_eq!(result.dealer_total, 24);

    let p = result.player("P").unwrap();
    assert_eq!((p.total, p.outcome), (12, Outcome::Win));
    let q = result.player("Q").unwrap();
    assert_eq!((q.total, q.outcome), (24, Outcome::Bust));

    assert_eq!(
        console.announcements,
        vec![
            Announcement::Bust("Q".to_string()),
            Announcement::Bust("Dealer".to_string()),
            Announcement::Win("P".to_string()),
        ]
    );
}

#[test]
fn dealer_higher_total_beats_player() {
    let mut game = Game::new(["Ann"], keep_deck(), 1).unwrap();
    stack_deck(
        &mut game,
        vec![
            card(Rank::Ten, Suit::Clubs),
            card(Rank::King, Suit::Hearts),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::Nine, Suit::Clubs),
        ],
    );
    let mut console = ScriptedConsole::default();

    let result = game.play(&mut console);

    assert_eq!(result.dealer_total, 19);
    assert_eq!(result.player("Ann").unwrap().outcome, Outcome::Lose);
    assert_eq!(
        console.announcements,
        vec![Announcement::Lose("Ann".to_string())]
    );
}

#[test]
fn round_clears_hands_and_refills_deck() {
    let mut game = Game::new(["Ann", "Bo"], TableOptions::default(), 9).unwrap();
    let mut console = ScriptedConsole::default();

    game.play(&mut console);

    for player in game.players() {
        assert!(player.hand().is_empty());
        assert_eq!(player.hand().total(), 0);
        assert_eq!(player.to_string(), format!("{}:\t<empty>", player.name()));
    }
    assert_eq!(game.dealer().hand().total(), 0);
    assert_eq!(game.dealer().to_string(), "Dealer:\t<empty>");

    assert_eq!(game.deck.len(), 52);
    let unique: HashSet<(Rank, Suit)> = game
        .deck
        .cards()
        .iter()
        .map(|card| (card.rank(), card.suit()))
        .collect();
    assert_eq!(unique.len(), 52);

    assert_eq!(game.phase(), RoundPhase::Idle);
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn kept_deck_runs_dry_without_stalling_the_round() {
    let mut game = Game::new(["Ann"], keep_deck(), 1).unwrap();
    stack_deck(
        &mut game,
        vec![
            card(Rank::Ten, Suit::Clubs),     // Ann
            card(Rank::Ten, Suit::Hearts),    // dealer hole
            card(Rank::Nine, Suit::Diamonds), // Ann
            card(Rank::Eight, Suit::Clubs),   // dealer
            card(Rank::Two, Suit::Spades),    // round two: Ann
            card(Rank::Three, Suit::Spades),  // round two: dealer
        ],
    );
    let mut console = ScriptedConsole::with_answers(&["n", "y"]);

    let first = game.play(&mut console);
    assert_eq!(first.player("Ann").unwrap().outcome, Outcome::Win);
    assert_eq!(
        console.take_announcements(),
        vec![Announcement::Win("Ann".to_string())]
    );
    assert_eq!(game.deck.len(), 2);

    let second = game.play(&mut console);

    // Two failed initial deals, Ann's hit and the dealer's hit.
    assert_eq!(
        console.take_announcements(),
        vec![
            Announcement::NoCardsLeft,
            Announcement::NoCardsLeft,
            Announcement::NoCardsLeft,
            Announcement::NoCardsLeft,
            Announcement::Lose("Ann".to_string()),
        ]
    );
    assert_eq!(second.round, 2);
    assert_eq!(second.dealer_total, 3);
    assert_eq!(second.player("Ann").unwrap().total, 2);
    assert_eq!(console.prompts.len(), 2);
    assert!(game.deck.is_empty());
    assert_eq!(game.rounds_played(), 2);
}

#[test]
fn dealer_stand_total_is_configurable() {
    let options = keep_deck()
        .with_dealer_name("House")
        .with_dealer_stands_on(19);
    let mut game = Game::new(["Ann"], options, 1).unwrap();
    stack_deck(
        &mut game,
        vec![
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Two, Suit::Clubs),
        ],
    );
    let mut console = ScriptedConsole::default();

    let result = game.play(&mut console);

    assert_eq!(result.dealer_total, 19);
    assert_eq!(result.player("Ann").unwrap().outcome, Outcome::Push);
    assert_eq!(
        console.announcements,
        vec![Announcement::Push("Ann".to_string())]
    );
    assert!(console.lines.contains(&"House:\t(19)\t10♥\t7♣\t2♣".to_string()));
}

#[test]
fn options_are_read_only_after_seating() {
    let options = TableOptions::default()
        .with_dealer_name("House")
        .with_dealer_stands_on(19);
    let game = Game::new(["Ann"], options, 1).unwrap();

    assert_eq!(game.options().dealer_name, "House");
    assert_eq!(game.options().dealer_stands_on, 19);
    assert_eq!(game.options().reshuffle, ReshufflePolicy::EveryRound);
    assert_eq!(game.dealer().name(), "House");
}

#[test]
fn every_round_gets_a_new_shuffle() {
    let mut game = Game::new(["Ann", "Bo"], TableOptions::default(), 7).unwrap();
    let mut console = ScriptedConsole::default();
    let mut previous = order(game.deck.cards());

    for round in 1..=5 {
        game.play(&mut console);

        let current = order(game.deck.cards());
        assert_eq!(current.len(), 52);
        assert_eq!(current.iter().collect::<HashSet<_>>().len(), 52);
        assert_ne!(current, previous, "round {round} reused the last order");
        previous = current;
    }
    assert_eq!(game.rounds_played(), 5);
}
