mod common;

use common::*;
use game_core::{GameSession, Roster, RoundReport, ScriptedSource, TROLL_BANNER};
use game_types::{GameError, RoundSettings};

#[test]
fn test_session_requires_three_players() {
    let bank = create_test_bank();
    let mut roster = Roster::new();
    roster.add("Ana").unwrap();
    roster.add("Bea").unwrap();
    let mut session = GameSession::new(roster, RoundSettings::default());

    let result = session.start_round(&bank, &mut seeded(1));
    assert!(matches!(result, Err(GameError::InvalidConfiguration { .. })));
    assert_eq!(session.history().round_counter, 0);
    assert!(session.last_round().is_none());
}

#[test]
fn test_session_threads_history_between_rounds() {
    let bank = create_test_bank();
    let mut session = GameSession::new(Roster::with_defaults(), RoundSettings::default());
    let mut rng = seeded(10);

    session.start_round(&bank, &mut rng).unwrap();
    session.replay(&bank, &mut rng).unwrap();
    let outcome = session.replay(&bank, &mut rng).unwrap();

    assert_eq!(outcome.history.round_counter, 3);
    assert_eq!(session.history().round_counter, 3);
    assert_eq!(session.history().last_words.len(), 3);
    let picks: u32 = session
        .history()
        .player_stats
        .values()
        .map(|s| s.total_impostor_count)
        .sum();
    assert_eq!(picks, 3);
}

#[test]
fn test_session_clamps_impostor_count() {
    let bank = create_test_bank();
    let settings = RoundSettings {
        impostor_count: 10,
        ..RoundSettings::default()
    };
    let mut session = GameSession::new(Roster::with_defaults(), settings);

    let outcome = session.start_round(&bank, &mut seeded(2)).unwrap();
    assert_eq!(outcome.round.impostors().count(), 3);
    assert_eq!(session.settings.impostor_count, 3);
}

#[test]
fn test_removing_a_player_mid_session() {
    let bank = create_test_bank();
    let mut session = GameSession::new(Roster::with_defaults(), RoundSettings::default());
    let mut rng = seeded(6);
    session.start_round(&bank, &mut rng).unwrap();

    let leaving = session.roster.players()[0].id;
    session.roster.remove(leaving).unwrap();
    let outcome = session.replay(&bank, &mut rng).unwrap();

    assert_eq!(outcome.players().len(), 3);
    assert!(outcome.players().iter().all(|p| p.id != leaving));
}

#[test]
fn test_return_to_setup_keeps_history() {
    let bank = create_test_bank();
    let mut session = GameSession::new(Roster::with_defaults(), RoundSettings::default());
    session.start_round(&bank, &mut seeded(3)).unwrap();

    session.return_to_setup();
    assert!(session.last_round().is_none());
    assert_eq!(session.history().round_counter, 1);
}

#[test]
fn test_report_for_troll_round() {
    let bank = create_test_bank();
    let settings = RoundSettings {
        troll_mode: true,
        ..RoundSettings::default()
    };
    let mut session = GameSession::new(Roster::with_defaults(), settings);
    // Gate fires, scenario espejo total
    let mut rng = ScriptedSource::constant(0.0);
    let outcome = session.start_round(&bank, &mut rng).unwrap();

    let report = RoundReport::from_outcome(outcome);
    assert_eq!(report.banner, TROLL_BANNER);
    assert_eq!(report.lines.len(), 4);
    assert_eq!(report.starting_player, "Agente 1");
    assert!(!report.no_impostor);
}
