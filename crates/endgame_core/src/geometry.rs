//! Square arithmetic and line-of-sight geometry.
//!
//! Everything here is a pure function of squares and occupancy; the feature
//! extractors build their tactical probes on top of these primitives.

use cozy_chess::{Board, Color, File, Rank, Square};

/// Chebyshev (king-move) distance between two squares.
pub fn chebyshev(a: Square, b: Square) -> u32 {
    let df = (a.file() as i32 - b.file() as i32).abs();
    let dr = (a.rank() as i32 - b.rank() as i32).abs();
    df.max(dr) as u32
}

/// Square shifted by a file/rank delta, if it stays on the board.
pub fn offset(sq: Square, df: i32, dr: i32) -> Option<Square> {
    let f = sq.file() as i32 + df;
    let r = sq.rank() as i32 + dr;
    if !(0..8).contains(&f) || !(0..8).contains(&r) {
        return None;
    }
    Some(Square::new(
        File::try_index(f as usize)?,
        Rank::try_index(r as usize)?,
    ))
}

/// Rank index as seen by `side`: 0 is its back rank, 7 the promotion rank.
pub fn relative_rank(sq: Square, side: Color) -> usize {
    match side {
        Color::White => sq.rank() as usize,
        Color::Black => 7 - sq.rank() as usize,
    }
}

/// The square a pawn of `owner` on `pawn` promotes on.
pub fn promotion_square(pawn: Square, owner: Color) -> Square {
    let rank = match owner {
        Color::White => Rank::Eighth,
        Color::Black => Rank::First,
    };
    Square::new(pawn.file(), rank)
}

/// The square directly in front of a pawn, in its direction of travel.
pub fn front_square(pawn: Square, owner: Color) -> Option<Square> {
    let dr = match owner {
        Color::White => 1,
        Color::Black => -1,
    };
    offset(pawn, 0, dr)
}

/// Number of pushes the pawn needs to reach its promotion rank, counting
/// the initial double step as one move.
pub fn push_steps(pawn: Square, owner: Color) -> u32 {
    let rel = relative_rank(pawn, owner) as u32;
    let steps = 7 - rel;
    if rel == 1 {
        steps - 1
    } else {
        steps
    }
}

/// Square-rule pawn-race approximation: can `king` catch the pawn before it
/// promotes? `king_to_move` grants the catching side the tempo; otherwise
/// the pawn runs first.
pub fn king_catches_pawn(king: Square, pawn: Square, owner: Color, king_to_move: bool) -> bool {
    let steps = push_steps(pawn, owner);
    let d = chebyshev(king, promotion_square(pawn, owner));
    let tempo = if king_to_move { 0 } else { 1 };
    d + tempo <= steps
}

/// Direct opposition: kings on the same file or rank, two squares apart,
/// with the square between them empty.
pub fn direct_opposition(board: &Board, a: Square, b: Square) -> bool {
    let df = b.file() as i32 - a.file() as i32;
    let dr = b.rank() as i32 - a.rank() as i32;
    let aligned = (df == 0 && dr.abs() == 2) || (dr == 0 && df.abs() == 2);
    if !aligned {
        return false;
    }
    match offset(a, df / 2, dr / 2) {
        Some(mid) => !board.occupied().has(mid),
        None => false,
    }
}

/// Rook pawns (a- and h-file) promote in a corner, which enables several
/// fortress draws.
pub fn is_edge_file(file: File) -> bool {
    file == File::A || file == File::H
}

/// True when both squares are the same color on the checkerboard.
pub fn same_color_squares(a: Square, b: Square) -> bool {
    (a.file() as usize + a.rank() as usize) % 2 == (b.file() as usize + b.rank() as usize) % 2
}

/// True when the squares strictly between `from` and `to` are all empty and
/// the two squares share a rank, file, or diagonal.
pub fn clear_path(board: &Board, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let df = to.file() as i32 - from.file() as i32;
    let dr = to.rank() as i32 - from.rank() as i32;
    let straight = df == 0 || dr == 0;
    let diagonal = df.abs() == dr.abs();
    if !straight && !diagonal {
        return false;
    }
    let step = (df.signum(), dr.signum());
    let mut sq = from;
    loop {
        sq = match offset(sq, step.0, step.1) {
            Some(next) => next,
            None => return false,
        };
        if sq == to {
            return true;
        }
        if board.occupied().has(sq) {
            return false;
        }
    }
}

/// Is `mid` strictly between `a` and `b` on a single axis? Used for
/// file and rank cutoff tests.
pub fn strictly_between(a: i32, mid: i32, b: i32) -> bool {
    (a < mid && mid < b) || (b < mid && mid < a)
}

/// Line-of-sight rook control of `target` from `rook`.
pub fn rook_controls(board: &Board, rook: Square, target: Square) -> bool {
    let df = target.file() as i32 - rook.file() as i32;
    let dr = target.rank() as i32 - rook.rank() as i32;
    (df == 0 || dr == 0) && clear_path(board, rook, target)
}

/// Line-of-sight bishop control of `target` from `bishop`.
pub fn bishop_controls(board: &Board, bishop: Square, target: Square) -> bool {
    let df = target.file() as i32 - bishop.file() as i32;
    let dr = target.rank() as i32 - bishop.rank() as i32;
    df.abs() == dr.abs() && clear_path(board, bishop, target)
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
