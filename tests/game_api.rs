//! End-to-end use of the public game interface.

use mailbox_chess::board::{FenError, MoveError, Position};
use mailbox_chess::game::{DrawReason, Game, GameStatus};
use mailbox_chess::{Color, Piece, Square};

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn new_game_matches_start_text() {
    let mut game = Game::new();
    assert_eq!(game.to_text(), START);
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.legal_moves().len(), 20);
}

#[test]
fn play_and_undo_a_short_game() {
    let mut game = Game::new();
    for mv in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"] {
        game.move_uci(mv).unwrap();
    }
    assert_eq!(
        game.to_text(),
        "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"
    );
    assert_eq!(game.history_len(), 5);

    while game.undo() {}
    assert_eq!(game.to_text(), START);
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = Game::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.move_uci(mv).unwrap();
    }
    let status = game.status();
    assert_eq!(
        status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(status.is_over());
    assert_eq!(status.to_string(), "checkmate, Black wins");
    assert!(game.legal_moves().is_empty());
}

#[test]
fn move_by_indices_and_squares() {
    let mut game = Game::new();
    // e2 = 12, e4 = 28
    let mv = game.move_indices(12, 28).unwrap();
    assert_eq!(mv.to_string(), "e2e4");
    let e7: Square = "e7".parse().unwrap();
    let e5: Square = "e5".parse().unwrap();
    game.move_squares(e7, e5, None).unwrap();
    assert_eq!(game.side_to_move(), Color::White);

    assert_eq!(
        game.move_indices(64, 0),
        Err(MoveError::OutOfRange { index: 64 })
    );
}

#[test]
fn move_text_errors() {
    let mut game = Game::new();
    assert_eq!(
        game.move_uci("e2"),
        Err(MoveError::InvalidLength { len: 2 })
    );
    assert!(matches!(
        game.move_uci("e2z4"),
        Err(MoveError::InvalidSquare { .. })
    ));
    assert_eq!(
        game.move_uci("e2e4x"),
        Err(MoveError::InvalidPromotion { char: 'x' })
    );
    assert!(matches!(
        game.move_uci("e2e5"),
        Err(MoveError::IllegalMove { .. })
    ));
    assert_eq!(game.history_len(), 0);
}

#[test]
fn load_replaces_position_and_history() {
    let mut game = Game::new();
    game.move_uci("d2d4").unwrap();

    let text = "8/P7/8/8/8/8/8/K1k5 w - - 0 1";
    game.load(text).unwrap();
    assert_eq!(game.history_len(), 0);
    assert_eq!(game.to_text(), text);
    assert!(!game.undo());

    let promoted = game.move_uci("a7a8r").unwrap();
    assert_eq!(promoted.promotion(), Some(Piece::Rook));
}

#[test]
fn failed_load_keeps_game() {
    let mut game = Game::new();
    game.move_uci("e2e4").unwrap();
    let before = game.to_text();

    assert_eq!(
        game.load("8/8/8/8/8/8/8/8 w - - 0 1"),
        Err(FenError::MissingKing {
            color: Color::White
        })
    );
    assert!(game.load("not a position").is_err());
    assert_eq!(game.to_text(), before);
    assert_eq!(game.history_len(), 1);
}

#[test]
fn fifty_move_rule_from_loaded_text() {
    let mut game = Game::from_text("4k3/8/8/8/8/8/8/R3K3 w - - 99 80").unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    game.move_uci("a1a2").unwrap();
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::FiftyMoveRule));
    game.undo();
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn threefold_claim_through_public_api() {
    let mut game = Game::new();
    assert!(!game.claim_threefold());
    for _ in 0..3 {
        for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            game.move_uci(mv).unwrap();
        }
    }
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.claim_threefold());
    assert_eq!(
        game.status(),
        GameStatus::Draw(DrawReason::ThreefoldRepetition)
    );
}

#[test]
fn position_display_draws_board() {
    let position: Position = START.parse().unwrap();
    let drawn = position.to_string();
    assert!(drawn.contains("a b c d e f g h"));
    assert_eq!(drawn.lines().filter(|l| !l.trim().is_empty()).count(), 9);
}
