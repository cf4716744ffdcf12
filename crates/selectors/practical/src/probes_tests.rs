use super::*;

fn board(fen: &str) -> Board {
    fen.parse().unwrap()
}

// =============================================================================
// Hanging and trade detection
// =============================================================================

#[test]
fn an_undefended_pawn_under_rook_attack_hangs() {
    // Black to move takes e4 with the rook; nothing recaptures.
    let pos = board("8/8/8/8/1r2P3/8/8/K3k3 b - - 0 1");
    assert!(hangs(&pos, Square::E4));
}

#[test]
fn a_king_defended_pawn_does_not_hang_to_a_rook() {
    // Rxe4 loses the exchange to Kxe4.
    let pos = board("8/8/8/8/1r2P3/4K3/8/7k b - - 0 1");
    assert!(!hangs(&pos, Square::E4));
}

#[test]
fn a_defended_rook_still_hangs_to_a_pawn() {
    // The pawn on d5 takes the rook on e4; even with a recapture the
    // exchange wins material for the pawn's side.
    let pos = board("8/8/8/3p4/4R3/4K3/8/7k b - - 0 1");
    assert!(hangs(&pos, Square::E4));
}

#[test]
fn a_level_rook_trade_is_an_offer_not_a_hang() {
    // Rxe4 Kxe4 is dead level.
    let pos = board("8/4r3/8/8/4R3/4K3/8/7k b - - 0 1");
    assert!(!hangs(&pos, Square::E4));
    assert!(trade_offered(&pos, Square::E4));
}

#[test]
fn an_unanswerable_rook_capture_is_a_hang_not_a_trade() {
    let pos = board("8/4r3/8/8/4R3/8/8/K6k b - - 0 1");
    assert!(hangs(&pos, Square::E4));
    assert!(!trade_offered(&pos, Square::E4));
}

// =============================================================================
// Recapture and safe checks
// =============================================================================

#[test]
fn a_guarded_square_lets_the_opponent_equalize() {
    // A white rook just captured on e4; the black king stands next to it.
    let pos = board("8/8/8/4k3/4R3/8/8/K7 b - - 0 1");
    assert!(recapture_equalizes(&pos, Square::E4));
}

#[test]
fn no_recapture_means_no_equalization() {
    let pos = board("8/8/8/8/4R3/8/8/K6k b - - 0 1");
    assert!(!recapture_equalizes(&pos, Square::E4));
}

#[test]
fn a_check_from_distance_is_safe() {
    let pos = board("4k3/8/4R3/8/8/8/8/4K3 b - - 0 1");
    assert!(safe_check(&pos, Square::E6));
}

#[test]
fn a_check_the_king_can_take_is_not_safe() {
    let pos = board("4k3/4R3/8/8/8/8/8/4K3 b - - 0 1");
    assert!(!safe_check(&pos, Square::E7));
}

#[test]
fn a_quiet_position_is_no_check_at_all() {
    let pos = board("4k3/8/8/8/4R3/8/8/4K3 b - - 0 1");
    assert!(!safe_check(&pos, Square::E4));
}

// =============================================================================
// Rook placement
// =============================================================================

#[test]
fn rook_behind_pawn_follows_the_pawn_owner_direction() {
    // White rook e1 is behind a white pawn on e5, but would be in front
    // of a black pawn on the same square.
    let aligned = board("7k/8/8/4P3/8/8/8/3KR3 w - - 0 1");
    assert!(rook_behind_pawn(&aligned, Square::E1, Square::E5, Color::White));
    assert!(!rook_behind_pawn(&aligned, Square::E1, Square::E5, Color::Black));
    // A rook off the pawn's file is never "behind" it.
    assert!(!rook_behind_pawn(&aligned, Square::D1, Square::E5, Color::White));
}

#[test]
fn rook_behind_pawn_needs_a_clear_file() {
    // The white king on e3 stands between rook and pawn.
    let pos = board("7k/8/8/4P3/8/4K3/8/4R3 w - - 0 1");
    assert!(!rook_behind_pawn(&pos, Square::E1, Square::E5, Color::White));
}
