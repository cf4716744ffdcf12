pub mod config;
pub mod driver;
pub mod geometry;
pub mod material;
pub mod oracle;
pub mod sim;

// Re-export the data model (not selector-specific)
pub use config::SelectorConfig;
pub use driver::select_with_fallback;
pub use material::{MaterialClass, PawnPhase};
pub use oracle::{best_outcome, Candidate, MoverOutcome, OracleVerdict};

use cozy_chess::Board;
use thiserror::Error;

// =============================================================================
// Selector trait — implemented by all move selectors (practical, fallback)
// =============================================================================

/// Errors surfaced by a move selector.
///
/// None of these are fatal to the caller: the orchestration driver recovers
/// every variant through the fallback policy as long as the input candidate
/// list is non-empty.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The input candidate list was empty. Caller precondition.
    #[error("no candidate moves to select from")]
    NoCandidates,
    /// The position's material is not one of the supported endgame families.
    #[error("no specialized selector for this material")]
    UnknownMaterial,
    /// A candidate move was rejected by the rules engine.
    #[error("candidate move {0} is illegal in this position")]
    IllegalCandidate(String),
    /// No candidate yielded a usable feature vector.
    #[error("feature extraction produced no usable candidate")]
    ExtractionFailed,
}

/// Result of a selection.
#[derive(Debug, Clone)]
pub struct Selection {
    /// The chosen move, always one of the input candidates.
    pub choice: Candidate,
    /// The material family the specialized analysis ran under, if any.
    pub material: Option<MaterialClass>,
}

/// Trait that all move selectors must implement.
///
/// A selector picks exactly one move out of a list of oracle-labeled
/// candidates. Implementations must be deterministic functions of their
/// inputs and must return a member of the input list.
pub trait Selector: Send {
    /// Select a move for the side to move in `board`.
    ///
    /// # Arguments
    /// * `board` - The current position (before any candidate is played)
    /// * `candidates` - Oracle-labeled legal moves, in oracle order
    /// * `config` - Tuning knobs for the selection pipeline
    fn select(
        &mut self,
        board: &Board,
        candidates: &[Candidate],
        config: &SelectorConfig,
    ) -> Result<Selection, SelectError>;

    /// Returns the selector's name for logging and reports.
    fn name(&self) -> &str;
}
