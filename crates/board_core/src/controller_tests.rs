use super::*;

fn at(name: &str) -> Coord {
    Coord::parse(name).unwrap()
}

fn reference_board() -> Chessboard {
    let mut cb = Chessboard::new();
    cb.set_piece(Piece::pawn(Color::White), at("b4")).unwrap();
    cb.set_piece(Piece::pawn(Color::White), at("e4")).unwrap();
    cb.set_piece(Piece::bishop(Color::White), at("c3")).unwrap();
    cb.set_piece(Piece::pawn(Color::Black), at("f6")).unwrap();
    cb.set_piece(Piece::rook(Color::Black), at("e6")).unwrap();
    cb.recompute_all_move_sets();
    cb
}

fn outcome(cb: &Chessboard, from: &str, to: &str) -> MoveOutcome {
    cb.attempt_move(at(from), at(to)).unwrap().outcome
}

#[test]
fn test_bishop_reference_moves() {
    let cb = reference_board();
    assert_eq!(outcome(&cb, "c3", "e1"), MoveOutcome::Legal);
    assert_eq!(outcome(&cb, "c3", "f6"), MoveOutcome::Legal);
    assert_eq!(outcome(&cb, "c3", "h5"), MoveOutcome::Illegal);
    assert_eq!(outcome(&cb, "c3", "b4"), MoveOutcome::Illegal);
    assert_eq!(outcome(&cb, "c3", "h8"), MoveOutcome::Illegal);
}

#[test]
fn test_rook_reference_moves() {
    let cb = reference_board();
    assert_eq!(outcome(&cb, "e6", "a6"), MoveOutcome::Legal);
    assert_eq!(outcome(&cb, "e6", "e4"), MoveOutcome::Legal);
    assert_eq!(outcome(&cb, "e6", "c5"), MoveOutcome::Illegal);
    assert_eq!(outcome(&cb, "e6", "f6"), MoveOutcome::Illegal);
}

#[test]
fn test_no_piece_at_origin() {
    let cb = reference_board();
    assert_eq!(outcome(&cb, "a1", "a2"), MoveOutcome::NoPieceAtOrigin);
    // Off-board origin is an absent cell, not an error
    let report = cb.attempt_move(Coord::new('z', 3), at("c3")).unwrap();
    assert_eq!(report.outcome, MoveOutcome::NoPieceAtOrigin);
}

#[test]
fn test_report_echoes_off_board_coordinates() {
    let cb = reference_board();
    let from_off = cb.attempt_move(Coord::new('z', 3), at("a2")).unwrap();
    assert_eq!(
        from_off.to_string(),
        "Checking move - From: [z,3]  To: [a,2] -- No piece at start!"
    );
    let to_off = cb.attempt_move(at("e6"), Coord::new('e', 9)).unwrap();
    assert_eq!(
        to_off.to_string(),
        "Checking move - From: [e,6]  To: [e,9] -- Fail!"
    );
}

#[test]
fn test_off_board_destination_is_illegal() {
    let cb = reference_board();
    let report = cb.attempt_move(at("c3"), Coord::from_indices(0, 1)).unwrap();
    assert_eq!(report.outcome, MoveOutcome::Illegal);
}

#[test]
fn test_pawn_moves_are_illegal() {
    let cb = reference_board();
    assert_eq!(outcome(&cb, "b4", "b5"), MoveOutcome::Illegal);
    assert!(cb.move_set(at("b4")).unwrap().destinations.is_empty());
}

#[test]
fn test_attempt_does_not_mutate() {
    let cb = reference_board();
    let generation = cb.board().generation();
    assert_eq!(outcome(&cb, "c3", "f6"), MoveOutcome::Legal);
    assert_eq!(cb.board().generation(), generation);
    assert_eq!(
        cb.board().cell_at(at("f6")).unwrap().piece(),
        Some(Piece::pawn(Color::Black))
    );
}

#[test]
fn test_stale_move_set_is_rejected() {
    let mut cb = reference_board();
    cb.set_piece(Piece::pawn(Color::Black), at("d2")).unwrap();
    let err = cb.attempt_move(at("c3"), at("e1")).unwrap_err();
    assert!(matches!(err, BoardError::StaleMoveSet { .. }));

    cb.recompute_all_move_sets();
    // d2 now holds an enemy pawn: capture allowed, e1 behind it is not
    assert_eq!(outcome(&cb, "c3", "d2"), MoveOutcome::Legal);
    assert_eq!(outcome(&cb, "c3", "e1"), MoveOutcome::Illegal);
}

#[test]
fn test_missing_move_set() {
    let mut cb = Chessboard::new();
    cb.set_piece(Piece::rook(Color::White), at("a1")).unwrap();
    let err = cb.attempt_move(at("a1"), at("a8")).unwrap_err();
    assert!(matches!(err, BoardError::MissingMoveSet { .. }));
}

#[test]
fn test_recompute_drops_removed_pieces() {
    let mut cb = reference_board();
    cb.remove_piece(at("e6")).unwrap();
    cb.recompute_all_move_sets();
    assert!(cb.move_set(at("e6")).is_none());
    assert_eq!(outcome(&cb, "e6", "a6"), MoveOutcome::NoPieceAtOrigin);
    // The bishop's view did not depend on the rook
    assert_eq!(outcome(&cb, "c3", "f6"), MoveOutcome::Legal);
}

#[test]
fn test_commit_move_relocates_on_success() {
    let mut cb = reference_board();
    let report = cb.commit_move(at("c3"), at("f6")).unwrap();
    assert_eq!(report.outcome, MoveOutcome::Legal);

    let board = cb.board();
    assert!(board.cell_at(at("c3")).unwrap().is_empty());
    assert_eq!(
        board.cell_at(at("f6")).unwrap().piece(),
        Some(Piece::bishop(Color::White))
    );
    // The black pawn is gone; the rook can now slide through f6
    assert_eq!(outcome(&cb, "e6", "f6"), MoveOutcome::Legal);
    assert_eq!(outcome(&cb, "f6", "c3"), MoveOutcome::Legal);
}

#[test]
fn test_commit_move_keeps_board_on_failure() {
    let mut cb = reference_board();
    let generation = cb.board().generation();
    let report = cb.commit_move(at("c3"), at("h5")).unwrap();
    assert_eq!(report.outcome, MoveOutcome::Illegal);
    assert_eq!(cb.board().generation(), generation);
}

#[test]
fn test_report_text() {
    let cb = reference_board();
    let ok = cb.attempt_move(at("c3"), at("e1")).unwrap();
    assert_eq!(
        ok.to_string(),
        "Checking move - From: [c,3]  To: [e,1] -- Success!"
    );
    let fail = cb.attempt_move(at("e6"), at("c5")).unwrap();
    assert_eq!(
        fail.to_string(),
        "Checking move - From: [e,6]  To: [c,5] -- Fail!"
    );
    let none = cb.attempt_move(at("d4"), at("d5")).unwrap();
    assert_eq!(
        none.to_string(),
        "Checking move - From: [d,4]  To: [d,5] -- No piece at start!"
    );
}
