//! Outcome-class partitioning and the numeric metric filters.

use cozy_chess::Board;
use endgame_core::{sim, Candidate, MoverOutcome};

/// Candidates of the given outcome class, in oracle order.
pub fn of_class(candidates: &[Candidate], class: MoverOutcome) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| c.outcome == class)
        .cloned()
        .collect()
}

/// Fastest mate among winning candidates, ties broken by the canonical
/// move identifier.
pub fn fastest_win(board: &Board, candidates: &[Candidate]) -> Option<Candidate> {
    candidates
        .iter()
        .min_by(|a, b| {
            win_distance(board, a)
                .cmp(&win_distance(board, b))
                .then_with(|| a.uci().cmp(&b.uci()))
        })
        .cloned()
}

/// A winning move without a reported distance ranks last, unless it mates
/// on the spot: the oracle leaves immediate checkmates unannotated.
fn win_distance(board: &Board, candidate: &Candidate) -> u64 {
    match candidate.dtm {
        Some(d) => u64::from(d),
        None => match sim::after_move(board, candidate.mv) {
            Some(after) if sim::is_checkmate(&after) => 0,
            _ => u64::MAX,
        },
    }
}

/// Keep only the resistant plateau among losing candidates.
///
/// Distances are scanned in descending order; the first adjacent pair more
/// than `gap` half-moves apart marks the boundary between comparable
/// resistance and a collapsing tail. Everything below the boundary is
/// discarded.
pub fn resistant_plateau(mut candidates: Vec<Candidate>, gap: u32) -> Vec<Candidate> {
    let mut distances: Vec<u32> = candidates.iter().map(loss_distance).collect();
    distances.sort_unstable_by(|a, b| b.cmp(a));

    let mut floor = match distances.last() {
        Some(d) => *d,
        None => return candidates,
    };
    for pair in distances.windows(2) {
        if pair[0] - pair[1] >= gap {
            floor = pair[0];
            break;
        }
    }

    candidates.retain(|c| loss_distance(c) >= floor);
    candidates
}

/// A lost move with no reported distance reads as mate on the spot.
fn loss_distance(candidate: &Candidate) -> u32 {
    candidate.dtm.unwrap_or(0)
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
