//! Rook versus rook and pawn, mover defending.
//!
//! The Philidor side of the family: blockade the pawn's path, keep the
//! rook behind the passer or at checking range on the long side, and
//! welcome a level rook trade, since the bare-king defense against the
//! pawn is usually tenable.

use cozy_chess::{Board, Piece};
use endgame_core::{
    geometry, sim, Candidate, MaterialClass, MoverOutcome, PawnPhase, SelectError,
};

use crate::cascade::{self, RankPlan};
use crate::probes;
use crate::FeatureExtractor;

pub struct KrvKrp;

#[derive(Debug, Clone, Copy)]
struct Features {
    rook_safe: bool,
    wins_pawn: bool,
    offers_trade: bool,
    behind_pawn: bool,
    checking_range: bool,
    blockades: bool,
    attacks_pawn: bool,
    safe_check: bool,
    useful: bool,
    phase: PawnPhase,
    king_to_block: i64,
}

static PLAN: RankPlan<Features> = RankPlan {
    filters: &[
        ("keeps the rook", |f| f.rook_safe),
        ("makes progress", |f| f.useful),
    ],
    draw_flags: &[
        |f| f.wins_pawn,
        |f| f.behind_pawn,
        |f| f.blockades,
        |f| f.attacks_pawn,
        |f| f.offers_trade,
        |f| f.checking_range,
        |f| f.safe_check,
    ],
    loss_flags: &[
        |f| f.safe_check,
        |f| f.checking_range,
        |f| f.behind_pawn,
        |f| f.blockades,
        |f| f.attacks_pawn,
        |f| f.wins_pawn,
        |f| f.offers_trade,
    ],
    keys: &[|f| f.king_to_block],
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

    let rook_safe = !probes::hangs(&after, rook);
    let offers_trade = probes::trade_offered(&after, rook);
    let safe_check = probes::safe_check(&after, candidate.mv.to);

    // The pawn can only disappear by our capture.
    let wins_pawn =
        their_pawn.is_none() && !probes::recapture_equalizes(&after, candidate.mv.to);

    let (behind_pawn, blockades, attacks_pawn, king_to_block, phase) = match their_pawn {
        Some(p) => {
            let behind = probes::rook_behind_pawn(&after, rook, p, them);
            let blockades = our_king.file() == p.file()
                && geometry::relative_rank(our_king, them) > geometry::relative_rank(p, them);
            let attacks = geometry::rook_controls(&after, rook, p);
            let block_sq = geometry::front_square(p, them)
                .unwrap_or_else(|| geometry::promotion_square(p, them));
            (
                behind,
                blockades,
                attacks,
                geometry::chebyshev(our_king, block_sq) as i64,
                PawnPhase::of_pawn(Some(p), them),
            )
        }
        // Capturing the pawn settles the most urgent phase outright; the
        // candidate must not lose the phase preference for it.
        None => (false, false, false, 0, PawnPhase::NearPromotion),
    };

    // Side checks need distance: a rook at arm's length cannot be chased
    // off by the king without losing the pawn's cover.
    let checking_range = (rook.file() as i32 - their_king.file() as i32).abs() >= 3;

    let king_before = board.king(us);
    let closed_in = match their_pawn {
        Some(p) => {
            let block_sq = geometry::front_square(p, them)
                .unwrap_or_else(|| geometry::promotion_square(p, them));
            geometry::chebyshev(our_king, block_sq) < geometry::chebyshev(king_before, block_sq)
        }
        None => true,
    };
    let useful = wins_pawn
        || behind_pawn
        || blockades
        || attacks_pawn
        || offers_trade
        || safe_check
        || closed_in;

    Some(Features {
        rook_safe,
        wins_pawn,
        offers_trade,
        behind_pawn,
        checking_range,
        blockades,
        attacks_pawn,
        safe_check,
        useful,
        phase,
        king_to_block,
    })
}

impl FeatureExtractor for KrvKrp {
    fn handles(&self, class: MaterialClass) -> bool {
        class == MaterialClass::RookVsRookPawn
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
        "kr-vs-krp"
    }
}
