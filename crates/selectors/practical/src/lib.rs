//! Practical Endgame Move Selection
//!
//! Chooses, among tablebase-labeled candidate moves, the one that is
//! hardest to meet over the board without ever giving up the best
//! theoretical result:
//! - Winning positions take the shortest mate, full stop.
//! - Drawn positions keep the draw while steering toward the opponent's
//!   narrowest path.
//! - Lost positions stay on the resistant plateau and hunt for swindles.
//!
//! All analysis is shallow: one or two plies of simulation per candidate
//! plus position geometry. The oracle already settled the theory.

mod cascade;
mod kbp_vs_kb;
mod kp_vs_k;
mod kp_vs_kp;
mod kr_vs_kp;
mod kr_vs_krp;
mod krp_vs_kr;
mod outcome;
mod probes;

use cozy_chess::Board;
use endgame_core::{
    best_outcome, Candidate, MaterialClass, MoverOutcome, SelectError, Selection, Selector,
    SelectorConfig,
};

pub use kbp_vs_kb::KbpvKb;
pub use kp_vs_k::KpvK;
pub use kp_vs_kp::KpvKp;
pub use kr_vs_kp::KrvKp;
pub use kr_vs_krp::KrvKrp;
pub use krp_vs_kr::KrpvKr;

/// Per-material-class feature analysis.
///
/// Implementations simulate each candidate on a private board copy and
/// rank the set through the constraint cascade. They are registered with
/// the selector and looked up by material class.
pub trait FeatureExtractor: Send {
    /// Does this extractor analyze positions of `class`?
    fn handles(&self, class: MaterialClass) -> bool;

    /// Pick the best candidate for the mover. `context` is the outcome
    /// class every candidate in the working set shares; wins never get
    /// here, they are resolved by mate distance alone.
    fn select(
        &self,
        board: &Board,
        context: MoverOutcome,
        candidates: &[Candidate],
    ) -> Result<Candidate, SelectError>;

    fn name(&self) -> &str;
}

/// The practical selection engine.
pub struct PracticalSelector {
    extractors: Vec<Box<dyn FeatureExtractor>>,
}

impl PracticalSelector {
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(KpvKp),
                Box::new(KpvK),
                Box::new(KrpvKr),
                Box::new(KrvKrp),
                Box::new(KrvKp),
                Box::new(KbpvKb),
            ],
        }
    }

    /// Build a selector with a custom extractor registry.
    pub fn with_extractors(extractors: Vec<Box<dyn FeatureExtractor>>) -> Self {
        Self { extractors }
    }
}

impl Default for PracticalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for PracticalSelector {
    fn select(
        &mut self,
        board: &Board,
        candidates: &[Candidate],
        config: &SelectorConfig,
    ) -> Result<Selection, SelectError> {
        let target = best_outcome(candidates).ok_or(SelectError::NoCandidates)?;
        let mut working = outcome::of_class(candidates, target);

        // Among provably winning moves the fastest mate dominates; no
        // feature analysis can improve on it.
        if target == MoverOutcome::Win {
            let choice =
                outcome::fastest_win(board, &working).ok_or(SelectError::ExtractionFailed)?;
            return Ok(Selection {
                choice,
                material: MaterialClass::classify(board),
            });
        }

        if target == MoverOutcome::Loss {
            working = outcome::resistant_plateau(working, config.collapse_gap_plies);
        }

        let class = MaterialClass::classify(board).ok_or(SelectError::UnknownMaterial)?;
        let extractor = self
            .extractors
            .iter()
            .find(|e| e.handles(class))
            .ok_or(SelectError::UnknownMaterial)?;

        match extractor.select(board, target, &working) {
            Ok(choice) => Ok(Selection {
                choice,
                material: Some(class),
            }),
            // Nothing yielded a usable feature vector: return the first
            // outcome-filtered candidate unranked.
            Err(SelectError::ExtractionFailed) => Ok(Selection {
                choice: working
                    .first()
                    .ok_or(SelectError::ExtractionFailed)?
                    .clone(),
                material: Some(class),
            }),
            Err(err) => Err(err),
        }
    }

    fn name(&self) -> &str {
        "practical"
    }
}
