use super::*;

fn sq(name: &str) -> Square {
    Coord::parse(name).and_then(|c| c.square()).unwrap()
}

fn names(set: DestinationSet) -> Vec<String> {
    set.squares().map(|s| s.to_string()).collect()
}

fn board_with(pieces: &[(Piece, &str)]) -> Board {
    let mut board = Board::new();
    for &(pc, at) in pieces {
        board.place(pc, Coord::parse(at).unwrap()).unwrap();
    }
    board
}

#[test]
fn test_rook_open_board() {
    // Rook on e4 on an otherwise empty board: 7 + 7 squares
    let board = board_with(&[(Piece::rook(Color::White), "e4")]);
    let set = destinations(&board, sq("e4"));
    assert_eq!(set.len(), 14);
    assert!(!set.contains(sq("e4")));
}

#[test]
fn test_bishop_open_board() {
    let board = board_with(&[(Piece::bishop(Color::White), "e4")]);
    assert_eq!(destinations(&board, sq("e4")).len(), 13);

    // Corner bishop sees the long diagonal only
    let board = board_with(&[(Piece::bishop(Color::Black), "a1")]);
    assert_eq!(
        names(destinations(&board, sq("a1"))),
        vec!["b2", "c3", "d4", "e5", "f6", "g7", "h8"]
    );
}

#[test]
fn test_queen_is_union_of_rook_and_bishop() {
    let board = board_with(&[(Piece::queen(Color::White), "d4")]);
    assert_eq!(destinations(&board, sq("d4")).len(), 27);
}

#[test]
fn test_rook_blocked_by_friend() {
    // Rook a1, own pawn a4: a2, a3 only on the file
    let board = board_with(&[
        (Piece::rook(Color::White), "a1"),
        (Piece::pawn(Color::White), "a4"),
    ]);
    let set = destinations(&board, sq("a1"));
    assert!(set.contains(sq("a2")));
    assert!(set.contains(sq("a3")));
    assert!(!set.contains(sq("a4")));
    assert!(!set.contains(sq("a5")));
    assert!(set.contains(sq("h1")));
    assert_eq!(set.len(), 2 + 7);
}

#[test]
fn test_rook_captures_enemy() {
    // Rook a1, enemy pawn a4: a2, a3, a4 (capture), nothing beyond
    let board = board_with(&[
        (Piece::rook(Color::White), "a1"),
        (Piece::pawn(Color::Black), "a4"),
    ]);
    let set = destinations(&board, sq("a1"));
    assert!(set.contains(sq("a4")));
    assert!(!set.contains(sq("a5")));
    assert_eq!(set.len(), 3 + 7);
}

#[test]
fn test_boxed_in_slider_has_no_moves() {
    let board = board_with(&[
        (Piece::bishop(Color::White), "a1"),
        (Piece::pawn(Color::White), "b2"),
        (Piece::rook(Color::Black), "h8"),
        (Piece::pawn(Color::Black), "g8"),
        (Piece::pawn(Color::Black), "h7"),
    ]);
    assert!(destinations(&board, sq("a1")).is_empty());
    assert!(destinations(&board, sq("h8")).is_empty());
}

#[test]
fn test_pawn_has_no_moves() {
    let board = board_with(&[
        (Piece::pawn(Color::White), "e2"),
        (Piece::pawn(Color::Black), "d3"),
    ]);
    assert!(destinations(&board, sq("e2")).is_empty());
    assert!(destinations(&board, sq("d3")).is_empty());
}

#[test]
fn test_empty_origin_has_no_moves() {
    let board = Board::new();
    assert!(destinations(&board, sq("c3")).is_empty());
}

#[test]
fn test_slide_dirs_table() {
    assert_eq!(slide_dirs(PieceKind::Bishop).len(), 4);
    assert_eq!(slide_dirs(PieceKind::Rook).len(), 4);
    assert_eq!(slide_dirs(PieceKind::Queen).len(), 8);
    assert!(slide_dirs(PieceKind::Pawn).is_empty());
    for &(df, dr) in slide_dirs(PieceKind::Bishop) {
        assert_eq!(df.abs(), dr.abs());
    }
    for &(df, dr) in slide_dirs(PieceKind::Rook) {
        assert!(df == 0 || dr == 0);
    }
}
