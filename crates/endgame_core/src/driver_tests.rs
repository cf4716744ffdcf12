use super::*;
use crate::oracle::{MoverOutcome, OracleVerdict};
use crate::SelectError;

fn board() -> Board {
    "8/8/4k3/4p3/8/3K4/4P3/8 w - - 0 1".parse().unwrap()
}

fn cands(ucis: &[&str]) -> Vec<Candidate> {
    ucis.iter()
        .map(|u| Candidate::from_oracle(u.parse().unwrap(), OracleVerdict { wdl: 0, dtm: None }))
        .collect()
}

/// Always picks the first candidate.
struct First;

impl Selector for First {
    fn select(
        &mut self,
        _board: &Board,
        candidates: &[Candidate],
        _config: &SelectorConfig,
    ) -> Result<Selection, SelectError> {
        let choice = candidates.first().ok_or(SelectError::NoCandidates)?.clone();
        Ok(Selection { choice, material: None })
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Always errors.
struct Broken;

impl Selector for Broken {
    fn select(
        &mut self,
        _board: &Board,
        _candidates: &[Candidate],
        _config: &SelectorConfig,
    ) -> Result<Selection, SelectError> {
        Err(SelectError::ExtractionFailed)
    }

    fn name(&self) -> &str {
        "broken"
    }
}

/// Returns a move that was never offered.
struct Stray;

impl Selector for Stray {
    fn select(
        &mut self,
        _board: &Board,
        _candidates: &[Candidate],
        _config: &SelectorConfig,
    ) -> Result<Selection, SelectError> {
        let choice = Candidate {
            mv: "a1a8".parse().unwrap(),
            outcome: MoverOutcome::Draw,
            dtm: None,
        };
        Ok(Selection { choice, material: None })
    }

    fn name(&self) -> &str {
        "stray"
    }
}

#[test]
fn empty_candidate_list_yields_no_selection() {
    let config = SelectorConfig::default();
    let result = select_with_fallback(&mut First, &mut First, &board(), &[], &config);
    assert!(result.is_none());
}

#[test]
fn healthy_primary_is_used_directly() {
    let config = SelectorConfig::default();
    let candidates = cands(&["d3e3", "d3c3"]);
    let selection =
        select_with_fallback(&mut First, &mut Broken, &board(), &candidates, &config).unwrap();
    assert_eq!(selection.choice.uci(), "d3e3");
}

#[test]
fn failing_primary_recovers_through_the_fallback() {
    let config = SelectorConfig::default();
    let candidates = cands(&["d3e3", "d3c3"]);
    let selection =
        select_with_fallback(&mut Broken, &mut First, &board(), &candidates, &config).unwrap();
    assert_eq!(selection.choice.uci(), "d3e3");
}

#[test]
fn membership_violation_recovers_through_the_fallback() {
    let config = SelectorConfig::default();
    let candidates = cands(&["d3e3", "d3c3"]);
    let selection =
        select_with_fallback(&mut Stray, &mut First, &board(), &candidates, &config).unwrap();
    assert_eq!(selection.choice.uci(), "d3e3", "the stray move must be discarded");
}
