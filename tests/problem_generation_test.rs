//! Problem generation integration tests
//!
//! Checks the answer invariant and per-level operand ranges across many
//! samples, with fixed seeds and with proptest-chosen seeds.

use dragon_math::problems::generate_problem_with_operator;
use dragon_math::{generate_problem, Level, Operator, Problem};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SAMPLES_PER_LEVEL: usize = 5000;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn samples(level: Level, count: usize, rng: &mut ChaCha8Rng) -> Vec<Problem> {
    (0..count).map(|_| generate_problem(level, rng)).collect()
}

fn compute(problem: &Problem) -> i64 {
    let (a, b) = (i64::from(problem.first), i64::from(problem.second));
    match problem.operator {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            assert_eq!(a % b, 0, "Division leaves a remainder: {:?}", problem);
            a / b
        }
    }
}

// ============================================================================
// Correctness invariant
// ============================================================================

#[test]
fn test_answer_matches_operands_at_every_level() {
    let mut rng = create_test_rng();
    for level in Level::ALL {
        for problem in samples(level, SAMPLES_PER_LEVEL, &mut rng) {
            assert_eq!(
                compute(&problem),
                i64::from(problem.answer),
                "Wrong answer at level {}: {:?}",
                level.number(),
                problem
            );
        }
    }
}

#[test]
fn test_every_reachable_operator_is_correct() {
    let mut rng = create_test_rng();
    for level in Level::ALL {
        for &operator in level.operators() {
            for _ in 0..SAMPLES_PER_LEVEL / 4 {
                let problem = generate_problem_with_operator(level, operator, &mut rng);
                assert!(problem.is_consistent(), "{:?}", problem);
            }
        }
    }
}

#[test]
fn test_out_of_range_level_number_generates_level_one_problems() {
    let mut rng = create_test_rng();
    for number in [0, 5, 100] {
        let level = Level::from_number(number);
        for problem in samples(level, 200, &mut rng) {
            assert_eq!(problem.operator, Operator::Add);
            assert!(problem.answer <= 9);
        }
    }
}

// ============================================================================
// Per-operator ranges
// ============================================================================

#[test]
fn test_division_is_exact_with_small_factors() {
    let mut rng = create_test_rng();
    let divisions: Vec<Problem> = samples(Level::Elder, SAMPLES_PER_LEVEL, &mut rng)
        .into_iter()
        .filter(|p| p.operator == Operator::Divide)
        .collect();
    assert!(!divisions.is_empty(), "Level 4 should produce divisions");

    for problem in divisions {
        assert!(problem.first > 0);
        assert_eq!(problem.first % problem.second, 0);
        assert!((2..=9).contains(&problem.second), "{:?}", problem);
        assert!((2..=9).contains(&problem.answer), "{:?}", problem);
    }
}

#[test]
fn test_subtraction_never_goes_negative() {
    let mut rng = create_test_rng();
    for level in Level::ALL {
        for problem in samples(level, SAMPLES_PER_LEVEL, &mut rng) {
            if problem.operator == Operator::Subtract {
                assert!(problem.first >= problem.second, "{:?}", problem);
            }
        }
    }
}

#[test]
fn test_level_one_addition_sum_at_most_nine() {
    let mut rng = create_test_rng();
    for problem in samples(Level::Hatchling, SAMPLES_PER_LEVEL, &mut rng) {
        assert_eq!(problem.operator, Operator::Add);
        assert!(problem.first + problem.second <= 9, "{:?}", problem);
    }
}

#[test]
fn test_higher_level_addition_and_subtraction_ranges() {
    let mut rng = create_test_rng();
    for level in [Level::Drake, Level::Elder] {
        for problem in samples(level, SAMPLES_PER_LEVEL, &mut rng) {
            match problem.operator {
                Operator::Add => {
                    assert!((1..=50).contains(&problem.first));
                    assert!((1..=50).contains(&problem.second));
                }
                Operator::Subtract => {
                    assert!((1..=100).contains(&problem.first));
                    assert!(problem.second >= 1);
                }
                _ => {}
            }
        }
    }
}

#[test]
fn test_explanation_mentions_both_operands() {
    let mut rng = create_test_rng();
    for level in Level::ALL {
        for problem in samples(level, 100, &mut rng) {
            assert!(problem.explanation.contains(&problem.first.to_string()));
            assert!(problem.explanation.contains(&problem.second.to_string()));
        }
    }
}

// ============================================================================
// Property tests
// ============================================================================

fn arbitrary_level() -> impl Strategy<Value = Level> {
    (1u32..=4).prop_map(Level::from_number)
}

proptest! {
    #[test]
    fn generated_problems_are_consistent(seed in any::<u64>(), level in arbitrary_level()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..50 {
            let problem = generate_problem(level, &mut rng);
            prop_assert!(problem.is_consistent(), "{:?}", problem);
            prop_assert!(level.operators().contains(&problem.operator));
        }
    }

    #[test]
    fn subtraction_is_non_negative(seed in any::<u64>(), level in arbitrary_level()) {
        prop_assume!(level.operators().contains(&Operator::Subtract));
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let problem = generate_problem_with_operator(level, Operator::Subtract, &mut rng);
        prop_assert!(problem.first >= problem.second);
    }

    #[test]
    fn division_has_no_remainder(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let problem = generate_problem_with_operator(Level::Elder, Operator::Divide, &mut rng);
        prop_assert_eq!(problem.first, problem.second * problem.answer);
    }
}
