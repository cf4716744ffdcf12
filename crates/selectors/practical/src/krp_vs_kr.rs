//! Rook and pawn versus rook, mover owning the pawn.
//!
//! The Lucena side of the family: push the pawn under cover, cut the
//! defending king off by file, keep the rook behind the pawn, and never
//! let the rook or the pawn go for free.

use cozy_chess::{Board, Piece};
use endgame_core::{
    geometry, sim, Candidate, MaterialClass, MoverOutcome, PawnPhase, SelectError,
};

use crate::cascade::{self, RankPlan};
use crate::probes;
use crate::FeatureExtractor;

pub struct KrpvKr;

#[derive(Debug, Clone, Copy)]
struct Features {
    rook_safe: bool,
    pawn_safe: bool,
    no_trade: bool,
    promotes: bool,
    cuts_off_king: bool,
    behind_pawn: bool,
    king_supports: bool,
    safe_check: bool,
    presses_rook: bool,
    useful: bool,
    phase: PawnPhase,
    king_to_goal: i64,
    pawn_advance: i64,
}

static PLAN: RankPlan<Features> = RankPlan {
    filters: &[
        ("keeps the rook", |f| f.rook_safe),
        ("keeps the pawn", |f| f.pawn_safe),
        ("declines the trade", |f| f.no_trade),
        ("makes progress", |f| f.useful),
    ],
    draw_flags: &[
        |f| f.promotes,
        |f| f.cuts_off_king,
        |f| f.behind_pawn,
        |f| f.king_supports,
        |f| f.safe_check,
        |f| f.presses_rook,
    ],
    loss_flags: &[
        |f| f.safe_check,
        |f| f.promotes,
        |f| f.presses_rook,
        |f| f.cuts_off_king,
        |f| f.behind_pawn,
        |f| f.king_supports,
    ],
    keys: &[|f| f.king_to_goal, |f| -f.pawn_advance],
    phase: |f| f.phase,
};

fn extract(board: &Board, candidate: &Candidate) -> Option<Features> {
    let us = board.side_to_move();
    let them = !us;
    let after = sim::after_move(board, candidate.mv)?;

    let rook = sim::find_piece(&after, us, Piece::Rook)?;
    let pawn = sim::find_piece(&after, us, Piece::Pawn);
    let their_rook = sim::find_piece(&after, them, Piece::Rook);
    let our_king = after.king(us);
    let their_king = after.king(them);

    let rook_safe = !probes::hangs(&after, rook);
    let pawn_safe = pawn.map(|p| !probes::hangs(&after, p)).unwrap_or(true);
    let no_trade = !probes::trade_offered(&after, rook);
    let promotes = candidate.mv.promotion.is_some();
    let safe_check = probes::safe_check(&after, candidate.mv.to);

    let (cuts_off_king, behind_pawn, king_supports, goal, pawn_advance) = match pawn {
        Some(p) => {
            let cut = geometry::strictly_between(
                their_king.file() as i32,
                rook.file() as i32,
                p.file() as i32,
            );
            let behind = probes::rook_behind_pawn(&after, rook, p, us);
            let supports = geometry::chebyshev(our_king, p) <= 1;
            let goal = geometry::promotion_square(p, us);
            (cut, behind, supports, goal, geometry::relative_rank(p, us) as i64)
        }
        // Promoted: the pawn's work is done.
        None => (false, false, false, candidate.mv.to, 7),
    };

    let presses_rook = their_rook
        .map(|tr| rook_safe && geometry::rook_controls(&after, rook, tr))
        .unwrap_or(false);

    let king_before = board.king(us);
    let closed_in =
        geometry::chebyshev(our_king, goal) < geometry::chebyshev(king_before, goal);
    let pushed_pawn = board.piece_on(candidate.mv.from) == Some(Piece::Pawn);
    let useful = promotes
        || pushed_pawn
        || cuts_off_king
        || behind_pawn
        || safe_check
        || presses_rook
        || closed_in;

    let phase = match pawn {
        Some(p) => PawnPhase::of_pawn(Some(p), us),
        None => PawnPhase::NearPromotion,
    };

    Some(Features {
        rook_safe,
        pawn_safe,
        no_trade,
        promotes,
        cuts_off_king,
        behind_pawn,
        king_supports,
        safe_check,
        presses_rook,
        useful,
        phase,
        king_to_goal: geometry::chebyshev(our_king, goal) as i64,
        pawn_advance,
    })
}

impl FeatureExtractor for KrpvKr {
    fn handles(&self, class: MaterialClass) -> bool {
        class == MaterialClass::RookPawnVsRook
    }

    fn select(
        &self,
        board: &Board,
        context: MoverOutcome,
        candidates: &[Candidate],
    ) -> Result<Candidate, SelectError> {
        let scored = cascade::score_all(board, candidates, extract)?;
        cascade::pick(scored, context, &PLAN).ok_or(SelectError::ExtractionFailed)
    }

    fn name(&self) -> &str {
        "krp-vs-kr"
    }
}

#[cfg(test)]
#[path = "krp_vs_kr_tests.rs"]
mod krp_vs_kr_tests;
