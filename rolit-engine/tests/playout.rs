//! End-to-end rules scenarios with hand-computed expectations.

use rolit_engine::{Board, Color, GameSession, Location, SaveState, Score};

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

#[test]
fn opening_sequence_scores() {
    let mut board = Board::new();

    // Red next to its own ball: nothing sandwiched, just a placement.
    assert!(board.apply_move(loc("c4"), Color::Red));
    assert_eq!(
        board.score(),
        Score {
            red: 2,
            yellow: 1,
            green: 1,
            blue: 1
        }
    );

    // Yellow at c5 touches Red and Yellow balls but closes no run: the
    // Red at c4 has empty cells behind it in every scanned direction.
    assert!(board.apply_move(loc("c5"), Color::Yellow));
    assert_eq!(
        board.score(),
        Score {
            red: 2,
            yellow: 2,
            green: 1,
            blue: 1
        }
    );

    // Green at e3 sandwiches the Blue at e4 against the Green at e5.
    assert!(board.apply_move(loc("e3"), Color::Green));
    assert_eq!(
        board.score(),
        Score {
            red: 2,
            yellow: 2,
            green: 3,
            blue: 0
        }
    );
    assert_eq!(board.get(loc("e4")), Some(Color::Green));
    assert_eq!(board.turn_count(), 3);
}

#[test]
fn sixty_turns_fill_the_board() {
    let mut board = Board::new();
    let session = GameSession::new(4, 0, 1, 1, 0);

    for turn in 0..60 {
        let color = session.color_for_turn(turn);
        let mv = board.candidate_moves()[0];
        assert!(board.apply_move(mv, color));
    }

    assert!(board.is_full());
    assert_eq!(board.turn_count(), 60);
    assert_eq!(board.score().total(), 64);
    assert!(board.candidate_moves().is_empty());
}

#[test]
fn finished_round_survives_a_save() {
    let mut board = Board::new();
    let mut session = GameSession::new(2, 1, 2, 0, 42);

    for turn in 0..60 {
        let color = session.color_for_turn(turn);
        let mv = board.candidate_moves()[0];
        assert!(board.apply_move(mv, color));
    }
    session.finish_round(board.score());
    session.advance_round();

    let state = SaveState {
        board,
        session: session.clone(),
    };
    let decoded = SaveState::decode(&state.encode()).unwrap();

    assert_eq!(decoded.board, board);
    assert_eq!(decoded.session, session);
    assert_eq!(decoded.board.turn_count(), 60);
    let recorded = decoded.session.round_scores()[0];
    let total: u8 = recorded.iter().map(|s| s.unwrap()).sum();
    assert_eq!(total, 64);
}
