//! Default Move Policy
//!
//! A total selector that trusts the oracle's ordering. Useful for:
//! - Recovering when the specialized analysis fails or misbehaves
//! - Guaranteeing the driver always returns a legal, outcome-preserving move
//!
//! The oracle lists candidates best-first, so the first entry is already a
//! sound choice. The only refinement: when that entry merely draws, prefer a
//! drawing move that is not a capture, since captures simplify the position
//! for the opponent.

use cozy_chess::Board;
use endgame_core::{sim, Candidate, MoverOutcome, SelectError, Selection, Selector, SelectorConfig};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// A selector that picks the first oracle-ordered candidate, with a single
/// non-capture preference among draws.
#[derive(Debug, Clone, Default)]
pub struct FallbackSelector;

impl FallbackSelector {
    pub fn new() -> Self {
        Self
    }
}

impl Selector for FallbackSelector {
    fn select(
        &mut self,
        board: &Board,
        candidates: &[Candidate],
        _config: &SelectorConfig,
    ) -> Result<Selection, SelectError> {
        let first = candidates.first().ok_or(SelectError::NoCandidates)?;

        let choice = if first.outcome == MoverOutcome::Draw {
            candidates
                .iter()
                .find(|c| c.outcome == MoverOutcome::Draw && !sim::is_capture(board, c.mv))
                .unwrap_or(first)
        } else {
            first
        };

        Ok(Selection {
            choice: choice.clone(),
            material: None,
        })
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
