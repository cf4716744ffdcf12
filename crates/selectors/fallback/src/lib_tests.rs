use super::*;
use endgame_core::OracleVerdict;

fn board(fen: &str) -> Board {
    fen.parse().unwrap()
}

fn cand(uci: &str, wdl: i8, dtm: Option<i32>) -> Candidate {
    Candidate::from_oracle(uci.parse().unwrap(), OracleVerdict { wdl, dtm })
}

#[test]
fn keeps_the_first_candidate_when_decisive() {
    // White king takes the pawn or walks away; the oracle put the capture first.
    let pos = board("8/8/4k3/8/3p4/3K4/8/8 w - - 0 1");
    let candidates = vec![cand("d3d4", -1, Some(19)), cand("d3e2", 0, None)];

    let mut selector = FallbackSelector::new();
    let selection = selector
        .select(&pos, &candidates, &SelectorConfig::default())
        .unwrap();
    assert_eq!(selection.choice.uci(), "d3d4");
}

#[test]
fn prefers_a_non_capture_among_draws() {
    // Both moves draw, but the first is a capture.
    let pos = board("8/8/4k3/8/3p4/3K4/8/8 w - - 0 1");
    let candidates = vec![cand("d3d4", 0, None), cand("d3e2", 0, None)];

    let mut selector = FallbackSelector::new();
    let selection = selector
        .select(&pos, &candidates, &SelectorConfig::default())
        .unwrap();
    assert_eq!(selection.choice.uci(), "d3e2");
}

#[test]
fn falls_back_to_the_first_draw_when_all_draws_capture() {
    let pos = board("8/8/4k3/8/3p4/3K4/8/8 w - - 0 1");
    let candidates = vec![cand("d3d4", 0, None)];

    let mut selector = FallbackSelector::new();
    let selection = selector
        .select(&pos, &candidates, &SelectorConfig::default())
        .unwrap();
    assert_eq!(selection.choice.uci(), "d3d4");
}

#[test]
fn empty_input_is_a_precondition_failure() {
    let pos = board("8/8/4k3/8/3p4/3K4/8/8 w - - 0 1");
    let mut selector = FallbackSelector::new();
    assert!(selector
        .select(&pos, &[], &SelectorConfig::default())
        .is_err());
}
