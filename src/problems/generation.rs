//! Problem generation.
//!
//! Picks an operator from the level's table, then draws operands from the
//! ranges for that level and operator. Division is built backwards from the
//! quotient so it never leaves a remainder.

use super::types::{Level, Operator, Problem};
use rand::Rng;
use tracing::debug;

/// Operand range for additions above level 1 (each operand).
pub const ADD_OPERAND_MAX: u32 = 50;

/// Largest minuend for subtractions at levels 3 and 4.
pub const SUBTRACT_MINUEND_MAX: u32 = 100;

/// Divisor and quotient range for division problems.
pub const DIVIDE_FACTOR_MIN: u32 = 2;
pub const DIVIDE_FACTOR_MAX: u32 = 9;

/// Generates a random problem for the given level.
pub fn generate_problem(level: Level, rng: &mut impl Rng) -> Problem {
    let operators = level.operators();
    let operator = operators[rng.gen_range(0..operators.len())];
    let problem = generate_problem_with_operator(level, operator, rng);
    debug!(
        level = level.number(),
        question = %problem.question(),
        answer = problem.answer,
        "generated problem"
    );
    problem
}

/// Generates a problem for an explicit operator, using that level's ranges.
pub fn generate_problem_with_operator(
    level: Level,
    operator: Operator,
    rng: &mut impl Rng,
) -> Problem {
    let (first, second) = roll_operands(level, operator, rng);
    let answer = match operator {
        Operator::Add => first + second,
        Operator::Subtract => first - second,
        Operator::Multiply => first * second,
        Operator::Divide => first / second,
    };

    Problem {
        first,
        second,
        operator,
        answer,
        explanation: explain(operator, first, second),
    }
}

/// Draws the two operands for a level and operator.
fn roll_operands(level: Level, operator: Operator, rng: &mut impl Rng) -> (u32, u32) {
    match (operator, level) {
        (Operator::Add, Level::Hatchling) => {
            let first = rng.gen_range(1..=8);
            let second = rng.gen_range(1..=9 - first);
            (first, second)
        }
        (Operator::Add, _) => (
            rng.gen_range(1..=ADD_OPERAND_MAX),
            rng.gen_range(1..=ADD_OPERAND_MAX),
        ),
        (Operator::Subtract, Level::Fledgling) => {
            let minuend = rng.gen_range(10..=19);
            let subtrahend = rng.gen_range(5..minuend);
            (minuend, subtrahend)
        }
        (Operator::Subtract, _) => {
            let minuend = rng.gen_range(1..=SUBTRACT_MINUEND_MAX);
            let subtrahend = rng.gen_range(1..=minuend);
            (minuend, subtrahend)
        }
        (Operator::Multiply, Level::Drake) => (rng.gen_range(2..=9), rng.gen_range(2..=9)),
        (Operator::Multiply, _) => (rng.gen_range(1..=12), rng.gen_range(1..=12)),
        (Operator::Divide, _) => {
            let divisor = rng.gen_range(DIVIDE_FACTOR_MIN..=DIVIDE_FACTOR_MAX);
            let quotient = rng.gen_range(DIVIDE_FACTOR_MIN..=DIVIDE_FACTOR_MAX);
            (divisor * quotient, divisor)
        }
    }
}

fn explain(operator: Operator, first: u32, second: u32) -> String {
    match operator {
        Operator::Add => format!("Add {} and {}", first, second),
        Operator::Subtract => format!("Subtract {} from {}", second, first),
        Operator::Multiply => format!("Multiply {} by {}", first, second),
        Operator::Divide => format!("Divide {} by {}", first, second),
    }
}
