//! Thin simulation adapter over the rules engine.
//!
//! All probing works on immutable position values: applying a candidate
//! clones the board, so sibling candidate evaluations can never observe one
//! another's simulated state.

use cozy_chess::{Board, Color, Move, Piece, Square};

/// All legal moves for the side to move.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    board.generate_moves(|set| {
        moves.extend(set);
        false
    });
    moves
}

/// The position after `mv`, or `None` if the rules engine rejects it.
pub fn after_move(board: &Board, mv: Move) -> Option<Board> {
    let mut next = board.clone();
    next.try_play(mv).ok()?;
    Some(next)
}

/// The square of the piece `mv` captures, accounting for en passant.
pub fn victim_square(board: &Board, mv: Move) -> Option<Square> {
    if board.colors(!board.side_to_move()).has(mv.to) {
        return Some(mv.to);
    }
    if board.piece_on(mv.from) == Some(Piece::Pawn) && mv.from.file() != mv.to.file() {
        // En passant: the captured pawn sits beside the destination.
        return Some(Square::new(mv.to.file(), mv.from.rank()));
    }
    None
}

pub fn is_capture(board: &Board, mv: Move) -> bool {
    victim_square(board, mv).is_some()
}

/// Legal moves of the side to move that capture the piece on `target`.
pub fn captures_of(board: &Board, target: Square) -> Vec<Move> {
    legal_moves(board)
        .into_iter()
        .filter(|mv| victim_square(board, *mv) == Some(target))
        .collect()
}

pub fn in_check(board: &Board) -> bool {
    !board.checkers().is_empty()
}

fn has_legal_move(board: &Board) -> bool {
    let mut any = false;
    board.generate_moves(|_| {
        any = true;
        true
    });
    any
}

pub fn is_checkmate(board: &Board) -> bool {
    in_check(board) && !has_legal_move(board)
}

pub fn is_stalemate(board: &Board) -> bool {
    !in_check(board) && !has_legal_move(board)
}

/// Locate the unique piece of the given side and type, if present.
pub fn find_piece(board: &Board, color: Color, piece: Piece) -> Option<Square> {
    board.colored_pieces(color, piece).into_iter().next()
}

#[cfg(test)]
#[path = "sim_tests.rs"]
mod sim_tests;
