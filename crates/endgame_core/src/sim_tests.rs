use super::*;

fn board(fen: &str) -> Board {
    fen.parse().unwrap()
}

fn mv(uci: &str) -> Move {
    uci.parse().unwrap()
}

#[test]
fn after_move_leaves_the_original_untouched() {
    let pos = board("8/8/8/8/4k3/8/4P3/4K3 w - - 0 1");
    let next = after_move(&pos, mv("e2e3")).expect("e2e3 is legal");
    assert_eq!(next.side_to_move(), Color::Black);
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.piece_on(Square::E2), Some(Piece::Pawn));
    assert_eq!(next.piece_on(Square::E3), Some(Piece::Pawn));
}

#[test]
fn after_move_rejects_illegal_moves() {
    let pos = board("8/8/8/8/4k3/8/4P3/4K3 w - - 0 1");
    assert!(after_move(&pos, mv("e2e5")).is_none());
    assert!(after_move(&pos, mv("e1e2")).is_none(), "king cannot step onto its own pawn");
}

#[test]
fn capture_detection_includes_en_passant() {
    // Black just played d7d5; white pawn on e5 may capture en passant.
    let pos = board("8/8/8/3pP3/8/8/k7/4K3 w - d6 0 2");
    let ep = mv("e5d6");
    assert!(is_capture(&pos, ep));
    assert_eq!(victim_square(&pos, ep), Some(Square::D5));
    assert!(!is_capture(&pos, mv("e5e6")));
}

#[test]
fn captures_of_finds_every_capture_of_a_square() {
    // White king and rook both reach the black pawn on e4.
    let pos = board("8/8/8/8/4p3/8/4R3/4K2k w - - 0 1");
    let caps = captures_of(&pos, Square::E4);
    assert_eq!(caps.len(), 1);
    assert_eq!(caps[0], mv("e2e4"));
}

#[test]
fn checkmate_and_stalemate_detection() {
    // Back-rank mate: rook to h8 against the cornered king.
    let pos = board("k7/8/K7/8/8/8/8/7R w - - 0 1");
    let after = after_move(&pos, mv("h1h8")).expect("rook mates on h8");
    assert!(is_checkmate(&after));
    assert!(!is_stalemate(&after));

    // Classic king-and-pawn stalemate.
    let stale = board("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(is_stalemate(&stale));
    assert!(!is_checkmate(&stale));
}

#[test]
fn find_piece_locates_the_unique_piece() {
    let pos = board("8/8/8/8/4k3/8/4P3/4K3 w - - 0 1");
    assert_eq!(find_piece(&pos, Color::White, Piece::Pawn), Some(Square::E2));
    assert_eq!(find_piece(&pos, Color::White, Piece::King), Some(Square::E1));
    assert_eq!(find_piece(&pos, Color::Black, Piece::Rook), None);
}
