//! King and pawn versus king and pawn.
//!
//! Everything here turns on opposition and pawn races. The practical edge
//! comes from keeping the balance while forcing the opponent to find the
//! only square that holds.

use cozy_chess::{Board, Piece};
use endgame_core::{
    geometry, sim, Candidate, MaterialClass, MoverOutcome, PawnPhase, SelectError,
};

use crate::cascade::{self, RankPlan};
use crate::probes;
use crate::FeatureExtractor;

pub struct KpvKp;

#[derive(Debug, Clone, Copy)]
struct Features {
    pawn_safe: bool,
    wins_pawn: bool,
    opposition: bool,
    race_won: bool,
    safe_check: bool,
    useful: bool,
    phase: PawnPhase,
    king_to_enemy_pawn: i64,
    pawn_advance: i64,
}

static PLAN: RankPlan<Features> = RankPlan {
    filters: &[
        ("keeps the pawn", |f| f.pawn_safe),
        ("makes progress", |f| f.useful),
    ],
    draw_flags: &[
        |f| f.wins_pawn,
        |f| f.opposition,
        |f| f.race_won,
        |f| f.safe_check,
    ],
    loss_flags: &[
        |f| f.safe_check,
        |f| f.opposition,
        |f| f.wins_pawn,
        |f| f.race_won,
    ],
    keys: &[|f| f.king_to_enemy_pawn, |f| -f.pawn_advance],
    phase: |f| f.phase,
};

fn extract(board: &Board, candidate: &Candidate) -> Option<Features> {
    let us = board.side_to_move();
    let them = !us;
    let after = sim::after_move(board, candidate.mv)?;

    let our_pawn = sim::find_piece(&after, us, Piece::Pawn);
    let their_pawn = sim::find_piece(&after, them, Piece::Pawn);
    let our_king = after.king(us);
    let their_king = after.king(them);

    let pawn_safe = match our_pawn {
        Some(p) => !probes::hangs(&after, p),
        // The pawn only leaves the board by promoting.
        None => true,
    };

    // Free capture: the enemy pawn is gone and no equalizing recapture of
    // the capturing unit exists.
    let wins_pawn = their_pawn.is_none()
        && sim::find_piece(board, them, Piece::Pawn).is_some()
        && !probes::recapture_equalizes(&after, candidate.mv.to);

    let opposition = geometry::direct_opposition(&after, our_king, their_king);
    let safe_check = probes::safe_check(&after, candidate.mv.to);

    // Square-rule race: our pawn outruns their king while their pawn does
    // not outrun ours. The side about to move gets the tempo.
    let our_run = our_pawn
        .map(|p| !geometry::king_catches_pawn(their_king, p, us, true))
        .unwrap_or(candidate.mv.promotion.is_some());
    let their_run = their_pawn
        .map(|p| !geometry::king_catches_pawn(our_king, p, them, false))
        .unwrap_or(false);
    let race_won = our_run && !their_run;

    let king_to_enemy_pawn = their_pawn
        .map(|p| geometry::chebyshev(our_king, p) as i64)
        .unwrap_or(0);
    let pawn_advance = our_pawn
        .map(|p| geometry::relative_rank(p, us) as i64)
        .unwrap_or(7);

    // Progress test against the pre-move position.
    let king_before = board.king(us);
    let closed_in = match their_pawn {
        Some(p) => geometry::chebyshev(our_king, p) < geometry::chebyshev(king_before, p),
        None => true,
    };
    let pushed_pawn = board.piece_on(candidate.mv.from) == Some(Piece::Pawn);
    let useful =
        wins_pawn || safe_check || opposition || race_won || pushed_pawn || closed_in;

    let phase = match our_pawn {
        Some(p) => PawnPhase::of_pawn(Some(p), us),
        None => PawnPhase::NearPromotion,
    };

    Some(Features {
        pawn_safe,
        wins_pawn,
        opposition,
        race_won,
        safe_check,
        useful,
        phase,
        king_to_enemy_pawn,
        pawn_advance,
    })
}

impl FeatureExtractor for KpvKp {
    fn handles(&self, class: MaterialClass) -> bool {
        class == MaterialClass::PawnVsPawn
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
        "kp-vs-kp"
    }
}

#[cfg(test)]
#[path = "kp_vs_kp_tests.rs"]
mod kp_vs_kp_tests;
