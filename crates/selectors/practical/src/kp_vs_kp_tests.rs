use super::*;
use endgame_core::OracleVerdict;

fn board(fen: &str) -> Board {
    fen.parse().unwrap()
}

fn draw(uci: &str) -> Candidate {
    Candidate::from_oracle(uci.parse().unwrap(), OracleVerdict { wdl: 0, dtm: None })
}

#[test]
fn takes_the_opposition_when_both_moves_hold_the_draw() {
    // Kd4 steps into direct opposition against the king on d6; Kb3 drifts.
    let pos = board("8/7p/3k4/8/8/2K5/4P3/8 w - - 0 1");
    let candidates = vec![draw("c3b3"), draw("c3d4")];

    let choice = KpvKp
        .select(&pos, MoverOutcome::Draw, &candidates)
        .unwrap();
    assert_eq!(choice.uci(), "c3d4");
}

#[test]
fn grabs_a_pawn_nobody_can_take_back() {
    // Kxd4 wins the pawn outright; the defending king is a board away.
    let pos = board("7k/8/8/8/3pK3/8/P7/8 w - - 0 1");
    let candidates = vec![draw("e4e5"), draw("e4d4")];

    let choice = KpvKp
        .select(&pos, MoverOutcome::Draw, &candidates)
        .unwrap();
    assert_eq!(choice.uci(), "e4d4");
}

#[test]
fn never_leaves_the_pawn_hanging() {
    // After Kd2 the pawn on e2 is lost to the king on e3... craft instead:
    // the mover must not walk the king away from its attacked pawn.
    let pos = board("8/8/8/7p/8/4k3/4P3/3K4 w - - 0 1");
    // d1c1 abandons e2; d1e1 keeps it defended.
    let candidates = vec![draw("d1c1"), draw("d1e1")];

    let choice = KpvKp
        .select(&pos, MoverOutcome::Draw, &candidates)
        .unwrap();
    assert_eq!(choice.uci(), "d1e1");
}
