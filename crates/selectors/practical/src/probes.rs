//! Shared tactical probes.
//!
//! Every extractor asks the same short questions about the position a
//! candidate leaves behind: is my key piece hanging, is a trade on offer,
//! was the move a safe check. All answers come from one- or two-ply
//! simulation against immutable board copies.

use cozy_chess::{Board, Color, Piece, Square};
use endgame_core::{geometry, sim};

/// Standard centipawn scale.
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 20_000,
    }
}

/// Does the piece on `sq`, owned by the side not to move, hang?
///
/// The side to move has a "safe capture" when the exchange cannot be
/// answered: either no recapture exists at all, or the victim outweighs
/// the capturing piece even after a recapture.
pub fn hangs(board: &Board, sq: Square) -> bool {
    let victim = match board.piece_on(sq) {
        Some(p) => p,
        None => return false,
    };
    for mv in sim::captures_of(board, sq) {
        let attacker = match board.piece_on(mv.from) {
            Some(p) => p,
            None => continue,
        };
        let after = match sim::after_move(board, mv) {
            Some(b) => b,
            None => continue,
        };
        if sim::captures_of(&after, mv.to).is_empty() {
            return true;
        }
        if piece_value(victim) > piece_value(attacker) {
            return true;
        }
    }
    false
}

/// Is a level trade of the piece on `sq` on offer? True when the side to
/// move can capture it with an equal-valued piece and a recapture exists.
pub fn trade_offered(board: &Board, sq: Square) -> bool {
    let victim = match board.piece_on(sq) {
        Some(p) => p,
        None => return false,
    };
    for mv in sim::captures_of(board, sq) {
        let attacker = match board.piece_on(mv.from) {
            Some(p) => p,
            None => continue,
        };
        if piece_value(attacker) != piece_value(victim) {
            continue;
        }
        let after = match sim::after_move(board, mv) {
            Some(b) => b,
            None => continue,
        };
        if !sim::captures_of(&after, mv.to).is_empty() {
            return true;
        }
    }
    false
}

/// After a capture landing on `sq`, can the side to move win the material
/// back with a recapture that is not itself lost on the spot?
pub fn recapture_equalizes(after: &Board, sq: Square) -> bool {
    for reply in sim::captures_of(after, sq) {
        if let Some(next) = sim::after_move(after, reply) {
            if !hangs(&next, reply.to) {
                return true;
            }
        }
    }
    false
}

/// Did the move that produced `after` (landing on `to`) deliver a check
/// that neither hangs the checking piece nor offers it for a level trade?
pub fn safe_check(after: &Board, to: Square) -> bool {
    sim::in_check(after) && !hangs(after, to) && !trade_offered(after, to)
}

/// Rook behind a passed pawn, either side's rook: same file, on the side
/// the pawn came from, with nothing in between.
pub fn rook_behind_pawn(board: &Board, rook: Square, pawn: Square, owner: Color) -> bool {
    rook.file() == pawn.file()
        && geometry::relative_rank(rook, owner) < geometry::relative_rank(pawn, owner)
        && geometry::clear_path(board, rook, pawn)
}

#[cfg(test)]
#[path = "probes_tests.rs"]
mod probes_tests;
