//! Rook versus pawn.
//!
//! The rook wins the pawn or dies trying: the probes watch for poisoned
//! grabs (every capture loses the rook), for the defending king chasing
//! the rook around, and for cutoffs that keep the king away from the
//! promotion square. Against a rook pawn the corner is the whole story.

use cozy_chess::{Board, Piece};
use endgame_core::{
    geometry, sim, Candidate, MaterialClass, MoverOutcome, PawnPhase, SelectError,
};

use crate::cascade::{self, RankPlan};
use crate::probes;
use crate::FeatureExtractor;

pub struct KrvKp;

#[derive(Debug, Clone, Copy)]
struct Features {
    rook_safe: bool,
    unharassed: bool,
    wins_pawn: bool,
    cuts_off_king: bool,
    attacks_pawn: bool,
    behind_pawn: bool,
    safe_check: bool,
    useful: bool,
    phase: PawnPhase,
    king_to_promo: i64,
    king_to_pawn: i64,
}

static PLAN: RankPlan<Features> = RankPlan {
    filters: &[
        ("keeps the rook", |f| f.rook_safe),
        ("stays out of the king's reach", |f| f.unharassed),
        ("makes progress", |f| f.useful),
    ],
    draw_flags: &[
        |f| f.wins_pawn,
        |f| f.cuts_off_king,
        |f| f.attacks_pawn,
        |f| f.behind_pawn,
        |f| f.safe_check,
    ],
    loss_flags: &[
        |f| f.safe_check,
        |f| f.wins_pawn,
        |f| f.cuts_off_king,
        |f| f.attacks_pawn,
        |f| f.behind_pawn,
    ],
    keys: &[|f| f.king_to_promo, |f| f.king_to_pawn],
    phase: |f| f.phase,
};

fn extract(board: &Board, candidate: &Candidate) -> Option<Features> {
    let us = board.side_to_move();
    let them = !us;
    let after = sim::after_move(board, candidate.mv)?;

    let rook = sim::find_piece(&after, us, Piece::Rook)?;
    let their_pawn = sim::find_piece(&after, them, Piece::Pawn);
    let our_king = after.king(us);
    let their_king = after.king(them);

    // A poisoned grab shows up right here: the capture leaves the rook
    // hanging to the defending king.
    let rook_safe = !probes::hangs(&after, rook);
    // King attacks the rook and our own king cannot hold its hand.
    let unharassed = !(geometry::chebyshev(their_king, rook) == 1
        && geometry::chebyshev(our_king, rook) > 1);
    let safe_check = probes::safe_check(&after, candidate.mv.to);

    let wins_pawn =
        their_pawn.is_none() && !probes::recapture_equalizes(&after, candidate.mv.to);

    let (cuts_off_king, attacks_pawn, behind_pawn, king_to_promo, king_to_pawn, phase) =
        match their_pawn {
            Some(p) => {
                let promo = geometry::promotion_square(p, them);
                let file_cut = geometry::strictly_between(
                    their_king.file() as i32,
                    rook.file() as i32,
                    p.file() as i32,
                );
                let rank_cut = geometry::strictly_between(
                    their_king.rank() as i32,
                    rook.rank() as i32,
                    p.rank() as i32,
                );
                (
                    file_cut || rank_cut,
                    geometry::rook_controls(&after, rook, p),
                    probes::rook_behind_pawn(&after, rook, p, them),
                    geometry::chebyshev(our_king, promo) as i64,
                    geometry::chebyshev(our_king, p) as i64,
                    PawnPhase::of_pawn(Some(p), them),
                )
            }
            // Capturing the pawn settles the most urgent phase outright.
            None => (false, false, false, 0, 0, PawnPhase::NearPromotion),
        };

    let king_before = board.king(us);
    let closed_in = match their_pawn {
        Some(p) => geometry::chebyshev(our_king, p) < geometry::chebyshev(king_before, p),
        None => true,
    };
    let useful = wins_pawn
        || cuts_off_king
        || attacks_pawn
        || behind_pawn
        || safe_check
        || closed_in;

    Some(Features {
        rook_safe,
        unharassed,
        wins_pawn,
        cuts_off_king,
        attacks_pawn,
        behind_pawn,
        safe_check,
        useful,
        phase,
        king_to_promo,
        king_to_pawn,
    })
}

impl FeatureExtractor for KrvKp {
    fn handles(&self, class: MaterialClass) -> bool {
        class == MaterialClass::RookVsPawn
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
        "kr-vs-kp"
    }
}

#[cfg(test)]
#[path = "kr_vs_kp_tests.rs"]
mod kr_vs_kp_tests;
