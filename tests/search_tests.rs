//! Search tests to verify the engine finds correct moves in various positions.

use std::thread;

use mailbox_chess::search::{
    find_best_move, find_best_move_with_params, SearchLimits, SearchParams, TerminalScoring,
    MATE_SCORE,
};
use mailbox_chess::sync::{SharedGame, StopFlag};
use mailbox_chess::Game;

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let mut game = Game::from_text("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").unwrap();
    let result = find_best_move(&mut game, &SearchLimits::depth(2));

    let mv = result.best_move.expect("Should find a move");
    assert_eq!(mv.to_string(), "e1e8", "Should find Qe8# (back rank mate)");
    assert_eq!(result.score, MATE_SCORE - 1);
}

/// Test that black finds mate as well
#[test]
fn finds_mate_in_one_for_black() {
    // Fool's mate
    let mut game =
        Game::from_text("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2").unwrap();
    let mv = game.best_move(2).expect("Should find a move");
    assert_eq!(mv.to_string(), "d8h4");
}

/// Test that the engine captures a free queen
#[test]
fn captures_hanging_queen() {
    let mut game = Game::from_text("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let mv = game.best_move(1).expect("Should find a move");
    assert_eq!(mv.to_string(), "e4d5");
}

/// Test that the engine avoids giving away material
#[test]
fn saves_attacked_queen() {
    // The f5 pawn attacks the queen on e4
    let mut game = Game::from_text("7k/8/8/5p2/4Q3/8/8/4K3 w - - 0 1").unwrap();
    let mv = game.best_move(2).expect("Should find a move");
    assert_eq!(mv.to_string().get(0..2), Some("e4"));
}

/// Test that the engine prefers a faster mate
#[test]
fn mate_score_is_ply_adjusted() {
    let mut game = Game::from_text("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").unwrap();
    let shallow = find_best_move(&mut game, &SearchLimits::depth(2));
    let deep = find_best_move(&mut game, &SearchLimits::depth(4));
    assert_eq!(shallow.score, deep.score);
    assert_eq!(deep.best_move.map(|m| m.to_string()), Some("e1e8".into()));
}

/// Without the mate sentinel, mate is just another leaf score
#[test]
fn accumulated_scoring_still_returns_legal_move() {
    let mut game = Game::from_text("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").unwrap();
    let params = SearchParams {
        terminal_scoring: TerminalScoring::Accumulated,
    };
    let result = find_best_move_with_params(&mut game, &SearchLimits::depth(2), &params);
    let mv = result.best_move.expect("Should find a move");
    assert!(result.score < MATE_SCORE / 2);
    assert!(game.legal_moves().contains(&mv));
}

/// Test that the search handles a position without moves
#[test]
fn no_move_when_stalemated() {
    let mut game = Game::from_text("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let result = find_best_move(&mut game, &SearchLimits::depth(3));
    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);
}

/// Test that the search always returns a legal move
#[test]
fn search_returns_legal_moves_through_a_game() {
    let mut game = Game::new();
    for _ in 0..8 {
        let Some(mv) = game.best_move(2) else {
            break;
        };
        assert!(game.legal_moves().contains(&mv));
        game.make_move(mv).unwrap();
    }
    assert!(game.history_len() > 0);
}

/// Test that a stop request from another thread ends the search with a move
#[test]
fn stop_from_another_thread() {
    let shared = SharedGame::new(Game::new());
    let stop = shared.stop_flag();
    let searcher = {
        let shared = shared.clone();
        thread::spawn(move || shared.search(4))
    };
    thread::sleep(std::time::Duration::from_millis(20));
    stop.stop();
    let result = searcher.join().unwrap();
    assert!(result.best_move.is_some());
    assert_eq!(shared.with(|game| game.history_len()), 0);
}

/// A pre-set flag limits the search to a single root move
#[test]
fn preset_stop_searches_one_root_move() {
    let mut game = Game::new();
    let limits = SearchLimits::depth(2).with_stop(StopFlag::stopped());
    let result = find_best_move(&mut game, &limits);
    assert!(result.best_move.is_some());
    // root plus one child plus its replies
    assert_eq!(result.stats.nodes, 1 + 1 + 20);
}
