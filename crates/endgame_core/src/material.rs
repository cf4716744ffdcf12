//! Material classification of the supported endgame families.

use cozy_chess::{Board, Color, Piece, Square};

use crate::geometry;

/// Supported endgame families, stated relative to the side to move.
///
/// Detection is mover-relative so that one family covers both colors:
/// `RookPawnVsRook` means the mover owns the rook and the pawn, whoever
/// that is. Configurations outside this list are served by the fallback
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialClass {
    /// King and pawn against a bare king, mover attacking.
    PawnVsKing,
    /// Bare king against king and pawn, mover defending.
    KingVsPawn,
    /// King and pawn on both sides.
    PawnVsPawn,
    /// Mover owns rook and pawn, opponent a rook.
    RookPawnVsRook,
    /// Mover owns a rook, opponent rook and pawn.
    RookVsRookPawn,
    /// Mover owns a rook, opponent a pawn.
    RookVsPawn,
    /// Mover owns bishop and pawn, opponent a bishop.
    BishopPawnVsBishop,
}

impl MaterialClass {
    /// Classify the position for its side to move.
    pub fn classify(board: &Board) -> Option<MaterialClass> {
        let us = board.side_to_move();
        let ours = side_counts(board, us)?;
        let theirs = side_counts(board, !us)?;
        match (ours, theirs) {
            ((1, 0, 0), (0, 0, 0)) => Some(MaterialClass::PawnVsKing),
            ((0, 0, 0), (1, 0, 0)) => Some(MaterialClass::KingVsPawn),
            ((1, 0, 0), (1, 0, 0)) => Some(MaterialClass::PawnVsPawn),
            ((1, 1, 0), (0, 1, 0)) => Some(MaterialClass::RookPawnVsRook),
            ((0, 1, 0), (1, 1, 0)) => Some(MaterialClass::RookVsRookPawn),
            ((0, 1, 0), (1, 0, 0)) => Some(MaterialClass::RookVsPawn),
            ((1, 0, 1), (0, 0, 1)) => Some(MaterialClass::BishopPawnVsBishop),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialClass::PawnVsKing => "KPvK",
            MaterialClass::KingVsPawn => "KvKP",
            MaterialClass::PawnVsPawn => "KPvKP",
            MaterialClass::RookPawnVsRook => "KRPvKR",
            MaterialClass::RookVsRookPawn => "KRvKRP",
            MaterialClass::RookVsPawn => "KRvKP",
            MaterialClass::BishopPawnVsBishop => "KBPvKB",
        }
    }
}

/// (pawns, rooks, bishops) for one side, or `None` when the side holds any
/// piece outside the supported families.
fn side_counts(board: &Board, color: Color) -> Option<(u32, u32, u32)> {
    let unsupported = board.colored_pieces(color, Piece::Queen)
        | board.colored_pieces(color, Piece::Knight);
    if !unsupported.is_empty() {
        return None;
    }
    Some((
        board.colored_pieces(color, Piece::Pawn).len(),
        board.colored_pieces(color, Piece::Rook).len(),
        board.colored_pieces(color, Piece::Bishop).len(),
    ))
}

/// Coarse advancement stage of the governing pawn. Used as a light ordering
/// signal, never a hard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PawnPhase {
    NoPawn,
    Early,
    MidBoard,
    NearPromotion,
}

impl PawnPhase {
    /// Phase of a pawn owned by `owner`, from its mover-relative rank.
    pub fn of_pawn(pawn: Option<Square>, owner: Color) -> PawnPhase {
        match pawn {
            None => PawnPhase::NoPawn,
            Some(sq) => match geometry::relative_rank(sq, owner) {
                r if r >= 5 => PawnPhase::NearPromotion,
                3 | 4 => PawnPhase::MidBoard,
                _ => PawnPhase::Early,
            },
        }
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod material_tests;
