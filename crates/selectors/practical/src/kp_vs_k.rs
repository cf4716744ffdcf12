//! King and pawn versus bare king, from either chair.
//!
//! The attacker escorts the pawn through its key squares; the defender
//! lives on the blockade, the square rule, and the opposition. One
//! extractor covers both orientations since the geometry is shared.

use cozy_chess::{Board, Piece, Square};
use endgame_core::{
    geometry, sim, Candidate, MaterialClass, MoverOutcome, PawnPhase, SelectError,
};

use crate::cascade::{self, RankPlan};
use crate::probes;
use crate::FeatureExtractor;

pub struct KpvK;

#[derive(Debug, Clone, Copy)]
struct Features {
    promotes: bool,
    pawn_safe: bool,
    race_won: bool,
    escorts: bool,
    key_square: bool,
    blockades: bool,
    contains: bool,
    opposition: bool,
    useful: bool,
    phase: PawnPhase,
    king_to_goal: i64,
    pawn_advance: i64,
}

static PLAN: RankPlan<Features> = RankPlan {
    filters: &[
        ("keeps the pawn", |f| f.pawn_safe),
        ("makes progress", |f| f.useful),
    ],
    draw_flags: &[
        |f| f.promotes,
        |f| f.race_won,
        |f| f.blockades,
        |f| f.contains,
        |f| f.opposition,
        |f| f.key_square,
        |f| f.escorts,
    ],
    loss_flags: &[
        |f| f.blockades,
        |f| f.contains,
        |f| f.opposition,
        |f| f.key_square,
        |f| f.escorts,
        |f| f.promotes,
        |f| f.race_won,
    ],
    keys: &[|f| f.king_to_goal, |f| -f.pawn_advance],
    phase: |f| f.phase,
};

fn extract(board: &Board, candidate: &Candidate) -> Option<Features> {
    let us = board.side_to_move();
    let them = !us;
    let after = sim::after_move(board, candidate.mv)?;
    let our_king = after.king(us);
    let their_king = after.king(them);

    if let Some(pawn) = sim::find_piece(&after, us, Piece::Pawn) {
        Some(attacker_features(board, &after, candidate, pawn, our_king, their_king))
    } else if let Some(pawn) = sim::find_piece(&after, them, Piece::Pawn) {
        Some(defender_features(board, &after, candidate, pawn, our_king, their_king))
    } else {
        // The pawn left the board: the mover promoted it, or the defender
        // captured it. Either way the candidate settled the most urgent
        // phase and must not lose the phase preference for it.
        let promotes = candidate.mv.promotion.is_some();
        Some(Features {
            promotes,
            pawn_safe: true,
            race_won: promotes,
            escorts: false,
            key_square: false,
            blockades: !promotes,
            contains: !promotes,
            opposition: false,
            useful: true,
            phase: PawnPhase::NearPromotion,
            king_to_goal: 0,
            pawn_advance: if promotes { 7 } else { 0 },
        })
    }
}

fn attacker_features(
    board: &Board,
    after: &Board,
    candidate: &Candidate,
    pawn: Square,
    our_king: Square,
    their_king: Square,
) -> Features {
    let us = board.side_to_move();
    let front = geometry::front_square(pawn, us);
    let goal = front.unwrap_or_else(|| geometry::promotion_square(pawn, us));

    let pawn_safe = !probes::hangs(after, pawn);
    let race_won = !geometry::king_catches_pawn(their_king, pawn, us, true);
    let escorts = geometry::chebyshev(our_king, goal) <= 1;
    // King ahead of the pawn on the same or a neighboring file.
    let key_square = geometry::relative_rank(our_king, us) > geometry::relative_rank(pawn, us)
        && (our_king.file() as i32 - pawn.file() as i32).abs() <= 1;
    let opposition = geometry::direct_opposition(after, our_king, their_king);

    let king_before = board.king(us);
    let closed_in = geometry::chebyshev(our_king, goal) < geometry::chebyshev(king_before, goal);
    let pushed_pawn = board.piece_on(candidate.mv.from) == Some(Piece::Pawn);
    let useful = race_won || key_square || opposition || pushed_pawn || closed_in;

    Features {
        promotes: false,
        pawn_safe,
        race_won,
        escorts,
        key_square,
        blockades: false,
        contains: false,
        opposition,
        useful,
        phase: PawnPhase::of_pawn(Some(pawn), us),
        king_to_goal: geometry::chebyshev(our_king, goal) as i64,
        pawn_advance: geometry::relative_rank(pawn, us) as i64,
    }
}

fn defender_features(
    board: &Board,
    after: &Board,
    _candidate: &Candidate,
    pawn: Square,
    our_king: Square,
    their_king: Square,
) -> Features {
    let us = board.side_to_move();
    let them = !us;
    let promo = geometry::promotion_square(pawn, them);

    // On the pawn's path, between it and the promotion square.
    let blockades = our_king.file() == pawn.file()
        && geometry::relative_rank(our_king, them) > geometry::relative_rank(pawn, them);
    // Inside the square of the pawn; the pawn side has the move next.
    let contains = geometry::king_catches_pawn(our_king, pawn, them, false);
    let opposition = geometry::direct_opposition(after, our_king, their_king);

    let king_before = board.king(us);
    let closed_in = geometry::chebyshev(our_king, promo) < geometry::chebyshev(king_before, promo);
    let useful = blockades || contains || opposition || closed_in;

    Features {
        promotes: false,
        pawn_safe: true,
        race_won: false,
        escorts: false,
        key_square: false,
        blockades,
        contains,
        opposition,
        useful,
        phase: PawnPhase::of_pawn(Some(pawn), them),
        king_to_goal: geometry::chebyshev(our_king, promo) as i64,
        pawn_advance: 0,
    }
}

impl FeatureExtractor for KpvK {
    fn handles(&self, class: MaterialClass) -> bool {
        matches!(
            class,
            MaterialClass::PawnVsKing | MaterialClass::KingVsPawn
        )
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
        "kp-vs-k"
    }
}
