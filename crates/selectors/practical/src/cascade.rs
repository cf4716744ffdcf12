//! Constraint cascade and priority ranking.
//!
//! The shared algorithmic skeleton behind every material class: a sequence
//! of non-emptying boolean filters, a phase-majority preference, a strict
//! lexicographic flag vector, numeric tie-breaks, and finally the canonical
//! move identifier. Every stage is a pure transformation over an ordered
//! candidate sequence.

use std::cmp::Ordering;

use cozy_chess::Board;
use endgame_core::{Candidate, MoverOutcome, PawnPhase, SelectError};
use log::{debug, warn};

/// A candidate paired with its extracted feature vector.
#[derive(Debug, Clone)]
pub struct Scored<F> {
    pub candidate: Candidate,
    pub features: F,
}

/// Ranking plan for one material class.
///
/// `filters` are must-have predicates applied in priority order under the
/// non-emptying discipline. `draw_flags` and `loss_flags` are strict
/// lexicographic preferences (true sorts first); loss plans front-load
/// forcing features. `keys` break remaining ties ascending.
pub struct RankPlan<F: 'static> {
    pub filters: &'static [(&'static str, fn(&F) -> bool)],
    pub draw_flags: &'static [fn(&F) -> bool],
    pub loss_flags: &'static [fn(&F) -> bool],
    pub keys: &'static [fn(&F) -> i64],
    pub phase: fn(&F) -> PawnPhase,
}

/// Extract features for every candidate, dropping the ones the rules
/// engine rejects. Errors only when nothing survives.
pub fn score_all<F>(
    board: &Board,
    candidates: &[Candidate],
    extract: impl Fn(&Board, &Candidate) -> Option<F>,
) -> Result<Vec<Scored<F>>, SelectError> {
    let mut scored = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match extract(board, candidate) {
            Some(features) => scored.push(Scored {
                candidate: candidate.clone(),
                features,
            }),
            None => warn!(
                "dropping candidate {} rejected by the rules engine",
                candidate.uci()
            ),
        }
    }
    if scored.is_empty() {
        Err(SelectError::ExtractionFailed)
    } else {
        Ok(scored)
    }
}

/// Keep only candidates satisfying `pred`, unless that would empty the set.
pub fn narrow<F>(set: Vec<Scored<F>>, pred: impl Fn(&F) -> bool) -> Vec<Scored<F>> {
    if set.iter().any(|s| pred(&s.features)) {
        set.into_iter().filter(|s| pred(&s.features)).collect()
    } else {
        set
    }
}

/// Prefer the most urgent pawn phase present, with the same non-emptying
/// discipline as the boolean filters.
pub fn prefer_urgent_phase<F>(set: Vec<Scored<F>>, phase: fn(&F) -> PawnPhase) -> Vec<Scored<F>> {
    let best = match set.iter().map(|s| phase(&s.features)).max() {
        Some(p) => p,
        None => return set,
    };
    narrow(set, |f| phase(f) == best)
}

/// Run the full cascade and ranking, returning the selected candidate.
pub fn pick<F>(set: Vec<Scored<F>>, context: MoverOutcome, plan: &RankPlan<F>) -> Option<Candidate> {
    let mut set = set;
    for (name, pred) in plan.filters {
        let before = set.len();
        set = narrow(set, pred);
        if set.len() != before {
            debug!("filter '{}' narrowed {} -> {}", name, before, set.len());
        }
    }
    set = prefer_urgent_phase(set, plan.phase);

    let flags = match context {
        MoverOutcome::Loss => plan.loss_flags,
        _ => plan.draw_flags,
    };
    set.sort_by(|a, b| {
        for flag in flags {
            // true sorts before false
            let ord = flag(&b.features).cmp(&flag(&a.features));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        for key in plan.keys {
            let ord = key(&a.features).cmp(&key(&b.features));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.candidate.uci().cmp(&b.candidate.uci())
    });
    set.into_iter().next().map(|s| s.candidate)
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod cascade_tests;
