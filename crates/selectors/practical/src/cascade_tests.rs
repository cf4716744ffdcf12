use super::*;
use endgame_core::{Candidate, OracleVerdict};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
struct Synthetic {
    a: bool,
    b: bool,
    phase: PawnPhase,
    key: i64,
}

static SYNTHETIC_PLAN: RankPlan<Synthetic> = RankPlan {
    filters: &[("a", |f| f.a)],
    draw_flags: &[|f| f.a, |f| f.b],
    loss_flags: &[|f| f.b, |f| f.a],
    keys: &[|f| f.key],
    phase: |f| f.phase,
};

const UCIS: &[&str] = &[
    "a1a2", "b1b2", "c1c2", "d1d2", "e1e2", "f1f2", "g1g2", "h1h2",
];

fn scored(uci: &str, features: Synthetic) -> Scored<Synthetic> {
    Scored {
        candidate: Candidate::from_oracle(
            uci.parse().unwrap(),
            OracleVerdict { wdl: 0, dtm: None },
        ),
        features,
    }
}

fn synthetic(a: bool, b: bool, key: i64) -> Synthetic {
    Synthetic {
        a,
        b,
        phase: PawnPhase::MidBoard,
        key,
    }
}

#[test]
fn narrow_filters_when_survivors_exist() {
    let set = vec![
        scored("a1a2", synthetic(true, false, 0)),
        scored("b1b2", synthetic(false, false, 0)),
    ];
    let narrowed = narrow(set, |f| f.a);
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].candidate.uci(), "a1a2");
}

#[test]
fn narrow_is_a_no_op_when_it_would_empty_the_set() {
    let set = vec![
        scored("a1a2", synthetic(false, false, 0)),
        scored("b1b2", synthetic(false, true, 0)),
    ];
    let narrowed = narrow(set, |f| f.a);
    assert_eq!(narrowed.len(), 2);
}

#[test]
fn narrowing_never_empties_the_set_across_random_inputs() {
    // Property check over random synthetic feature vectors: after any
    // filter, the set is non-empty, and it is unchanged exactly when no
    // candidate satisfied the predicate.
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..500 {
        let n = rng.gen_range(1..=UCIS.len());
        let set: Vec<Scored<Synthetic>> = (0..n)
            .map(|i| scored(UCIS[i], synthetic(rng.gen(), rng.gen(), rng.gen_range(0..8))))
            .collect();
        let any_a = set.iter().any(|s| s.features.a);
        let before = set.len();

        let narrowed = narrow(set, |f| f.a);
        assert!(!narrowed.is_empty());
        if any_a {
            assert!(narrowed.iter().all(|s| s.features.a));
        } else {
            assert_eq!(narrowed.len(), before);
        }
    }
}

#[test]
fn phase_preference_keeps_the_most_urgent_phase() {
    let mut early = synthetic(true, false, 0);
    early.phase = PawnPhase::Early;
    let set = vec![
        scored("a1a2", early),
        scored("b1b2", synthetic(true, false, 0)),
    ];
    let narrowed = prefer_urgent_phase(set, |f| f.phase);
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].candidate.uci(), "b1b2");
}

#[test]
fn lexicographic_flags_decide_before_numeric_keys() {
    // b1b2 has the better key but loses the second flag.
    let set = vec![
        scored("a1a2", synthetic(true, true, 5)),
        scored("b1b2", synthetic(true, false, 0)),
    ];
    let choice = pick(set, MoverOutcome::Draw, &SYNTHETIC_PLAN).unwrap();
    assert_eq!(choice.uci(), "a1a2");
}

// Same flags, no filter cascade: isolates the ranking stages.
static RANKING_PLAN: RankPlan<Synthetic> = RankPlan {
    filters: &[],
    draw_flags: &[|f| f.a, |f| f.b],
    loss_flags: &[|f| f.b, |f| f.a],
    keys: &[|f| f.key],
    phase: |f| f.phase,
};

#[test]
fn loss_context_front_loads_its_own_flag_vector() {
    // One candidate carries only `a`, the other only `b`.
    let set = vec![
        scored("a1a2", synthetic(true, false, 0)),
        scored("b1b2", synthetic(false, true, 0)),
    ];
    // Draw order leads with `a`.
    let choice = pick(set.clone(), MoverOutcome::Draw, &RANKING_PLAN).unwrap();
    assert_eq!(choice.uci(), "a1a2");
    // Loss order leads with `b`.
    let choice = pick(set, MoverOutcome::Loss, &RANKING_PLAN).unwrap();
    assert_eq!(choice.uci(), "b1b2");
}

#[test]
fn numeric_keys_break_flag_ties_ascending() {
    let set = vec![
        scored("b1b2", synthetic(true, true, 2)),
        scored("a1a2", synthetic(true, true, 4)),
    ];
    let choice = pick(set, MoverOutcome::Draw, &SYNTHETIC_PLAN).unwrap();
    assert_eq!(choice.uci(), "b1b2");
}

#[test]
fn final_ties_fall_to_the_canonical_identifier() {
    let set = vec![
        scored("c1c2", synthetic(true, true, 1)),
        scored("a1a2", synthetic(true, true, 1)),
        scored("b1b2", synthetic(true, true, 1)),
    ];
    let choice = pick(set, MoverOutcome::Draw, &SYNTHETIC_PLAN).unwrap();
    assert_eq!(choice.uci(), "a1a2");
}

#[test]
fn picking_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    for _ in 0..100 {
        let n = rng.gen_range(1..=UCIS.len());
        let set: Vec<Scored<Synthetic>> = (0..n)
            .map(|i| scored(UCIS[i], synthetic(rng.gen(), rng.gen(), rng.gen_range(0..8))))
            .collect();
        let first = pick(set.clone(), MoverOutcome::Draw, &SYNTHETIC_PLAN).unwrap();
        let second = pick(set, MoverOutcome::Draw, &SYNTHETIC_PLAN).unwrap();
        assert_eq!(first.uci(), second.uci());
    }
}
