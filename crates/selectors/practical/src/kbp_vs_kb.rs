//! Bishop and pawn versus bishop, mover owning the pawn.
//!
//! Same-colored bishops fight over one diagonal: whoever controls the
//! square in front of the pawn decides the game. The one fortress to
//! respect is the wrong rook pawn, where no amount of shepherding
//! promotes against a king in the corner.

use cozy_chess::{Board, Piece, Square};
use endgame_core::{
    geometry, sim, Candidate, MaterialClass, MoverOutcome, PawnPhase, SelectError,
};

use crate::cascade::{self, RankPlan};
use crate::probes;
use crate::FeatureExtractor;

pub struct KbpvKb;

#[derive(Debug, Clone, Copy)]
struct Features {
    bishop_safe: bool,
    pawn_safe: bool,
    no_trade: bool,
    avoids_fortress: bool,
    promotes: bool,
    wins_bishop: bool,
    controls_key_square: bool,
    safe_check: bool,
    useful: bool,
    phase: PawnPhase,
    king_to_goal: i64,
    pawn_advance: i64,
}

static PLAN: RankPlan<Features> = RankPlan {
    filters: &[
        ("keeps the bishop", |f| f.bishop_safe),
        ("keeps the pawn", |f| f.pawn_safe),
        ("stays out of the corner fortress", |f| f.avoids_fortress),
        ("declines the trade", |f| f.no_trade),
        ("makes progress", |f| f.useful),
    ],
    draw_flags: &[
        |f| f.promotes,
        |f| f.wins_bishop,
        |f| f.controls_key_square,
        |f| f.safe_check,
    ],
    loss_flags: &[
        |f| f.safe_check,
        |f| f.promotes,
        |f| f.wins_bishop,
        |f| f.controls_key_square,
    ],
    keys: &[|f| f.king_to_goal, |f| -f.pawn_advance],
    phase: |f| f.phase,
};

/// The square the pawn must cross next: the promotion square once it is
/// about to queen, the blockade square before that.
fn key_square(pawn: Square, phase: PawnPhase, us: cozy_chess::Color) -> Square {
    match phase {
        PawnPhase::NearPromotion => geometry::promotion_square(pawn, us),
        _ => geometry::front_square(pawn, us)
            .unwrap_or_else(|| geometry::promotion_square(pawn, us)),
    }
}

fn extract(board: &Board, candidate: &Candidate) -> Option<Features> {
    let us = board.side_to_move();
    let them = !us;
    let after = sim::after_move(board, candidate.mv)?;

    let bishop = sim::find_piece(&after, us, Piece::Bishop)?;
    let pawn = sim::find_piece(&after, us, Piece::Pawn);
    let their_bishop = sim::find_piece(&after, them, Piece::Bishop);
    let our_king = after.king(us);
    let their_king = after.king(them);

    let bishop_safe = !probes::hangs(&after, bishop);
    let pawn_safe = pawn.map(|p| !probes::hangs(&after, p)).unwrap_or(true);
    let no_trade = !probes::trade_offered(&after, bishop);
    let promotes = candidate.mv.promotion.is_some();
    let safe_check = probes::safe_check(&after, candidate.mv.to);

    let wins_bishop = their_bishop.is_none()
        && sim::find_piece(board, them, Piece::Bishop).is_some()
        && !probes::recapture_equalizes(&after, candidate.mv.to);

    let (avoids_fortress, controls_key_square, goal, pawn_advance, phase) = match pawn {
        Some(p) => {
            let promo = geometry::promotion_square(p, us);
            let phase = PawnPhase::of_pawn(Some(p), us);
            // Wrong rook pawn: the bishop does not cover the promotion
            // corner and the defending king is already at the door.
            let fortress = geometry::is_edge_file(p.file())
                && !geometry::same_color_squares(bishop, promo)
                && geometry::chebyshev(their_king, promo) <= 2;
            let key = key_square(p, phase, us);
            let controls = geometry::bishop_controls(&after, bishop, key)
                || geometry::chebyshev(our_king, key) <= 1;
            (
                !fortress,
                controls,
                key,
                geometry::relative_rank(p, us) as i64,
                phase,
            )
        }
        None => (true, false, candidate.mv.to, 7, PawnPhase::NearPromotion),
    };

    let king_before = board.king(us);
    let closed_in =
        geometry::chebyshev(our_king, goal) < geometry::chebyshev(king_before, goal);
    let pushed_pawn = board.piece_on(candidate.mv.from) == Some(Piece::Pawn);
    let useful = promotes
        || wins_bishop
        || pushed_pawn
        || controls_key_square
        || safe_check
        || closed_in;

    Some(Features {
        bishop_safe,
        pawn_safe,
        no_trade,
        avoids_fortress,
        promotes,
        wins_bishop,
        controls_key_square,
        safe_check,
        useful,
        phase,
        king_to_goal: geometry::chebyshev(our_king, goal) as i64,
        pawn_advance,
    })
}

impl FeatureExtractor for KbpvKb {
    fn handles(&self, class: MaterialClass) -> bool {
        class == MaterialClass::BishopPawnVsBishop
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
        "kbp-vs-kb"
    }
}
