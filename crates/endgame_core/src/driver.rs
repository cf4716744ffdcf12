//! Orchestration: run the specialized selector, recover through the
//! fallback policy on any failure.

use cozy_chess::Board;
use log::warn;

use crate::config::SelectorConfig;
use crate::oracle::Candidate;
use crate::{Selection, Selector};

/// Select a move, guaranteeing a result whenever `candidates` is non-empty.
///
/// The primary selector's output is checked against the membership
/// invariant: whatever it returns must be one of the input candidates.
/// Errors and violations are logged and recovered through `fallback`,
/// which is total by construction.
pub fn select_with_fallback(
    primary: &mut dyn Selector,
    fallback: &mut dyn Selector,
    board: &Board,
    candidates: &[Candidate],
    config: &SelectorConfig,
) -> Option<Selection> {
    if candidates.is_empty() {
        return None;
    }
    match primary.select(board, candidates, config) {
        Ok(selection) if is_member(&selection, candidates) => return Some(selection),
        Ok(selection) => warn!(
            "{} returned non-candidate move {}; using {}",
            primary.name(),
            selection.choice.uci(),
            fallback.name()
        ),
        Err(err) => warn!("{} failed ({}); using {}", primary.name(), err, fallback.name()),
    }

    let selection = fallback.select(board, candidates, config).ok()?;
    debug_assert!(
        is_member(&selection, candidates),
        "fallback selector must return an input candidate"
    );
    Some(selection)
}

fn is_member(selection: &Selection, candidates: &[Candidate]) -> bool {
    candidates.iter().any(|c| c.mv == selection.choice.mv)
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
