//! Oracle verdicts and their conversion to mover-perspective candidates.
//!
//! The tablebase oracle annotates every legal move of the current position
//! with the exact game result and, when decisive, a distance-to-mate. Its
//! labels describe the position *after* the move, i.e. they are stated for
//! the opponent of the side this engine selects for.

use cozy_chess::Move;

/// Raw tablebase verdict for one legal move.
///
/// `wdl` is -1/0/+1 for the side to move after the move. `dtm` keeps the
/// oracle's sign and unit (half-moves); `None` for draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleVerdict {
    pub wdl: i8,
    pub dtm: Option<i32>,
}

/// Game-theoretic result from the mover's perspective.
///
/// Ordered so that `max()` over a candidate list yields the best outcome
/// class present (Win over Draw over Loss).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoverOutcome {
    Loss,
    Draw,
    Win,
}

impl MoverOutcome {
    /// Invert an oracle verdict into the mover's perspective.
    ///
    /// The oracle labels the side to move after the candidate, so
    /// opponent-loss means the mover wins and opponent-win means the mover
    /// loses. Anything outside {-1, 0, +1} maps to `Draw`; a malformed
    /// label must never be promoted to a decisive class.
    pub fn from_verdict(verdict: OracleVerdict) -> MoverOutcome {
        match verdict.wdl {
            -1 => MoverOutcome::Win,
            1 => MoverOutcome::Loss,
            _ => MoverOutcome::Draw,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoverOutcome::Win => "win",
            MoverOutcome::Draw => "draw",
            MoverOutcome::Loss => "loss",
        }
    }
}

/// One oracle-labeled candidate move, normalized to the mover's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,
    pub outcome: MoverOutcome,
    /// Distance-to-mate magnitude in half-moves. Defined only for decisive
    /// outcomes; a checkmating move has distance 0.
    pub dtm: Option<u32>,
}

impl Candidate {
    /// Build a candidate from a raw oracle verdict.
    pub fn from_oracle(mv: Move, verdict: OracleVerdict) -> Candidate {
        let outcome = MoverOutcome::from_verdict(verdict);
        let dtm = match outcome {
            MoverOutcome::Draw => None,
            _ => verdict.dtm.map(|d| d.unsigned_abs()),
        };
        Candidate { mv, outcome, dtm }
    }

    /// Canonical move identifier, used for deterministic tie-breaking.
    pub fn uci(&self) -> String {
        self.mv.to_string()
    }
}

/// Best outcome class present among the candidates, if any.
pub fn best_outcome(candidates: &[Candidate]) -> Option<MoverOutcome> {
    candidates.iter().map(|c| c.outcome).max()
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod oracle_tests;
