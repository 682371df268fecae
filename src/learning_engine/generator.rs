use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::learning_engine::{
    helpers,
    models::{Difficulty, Operation, Problem, ProblemRequest},
};

/// Attempts made to find a question id outside the exclude set.
pub const MAX_ATTEMPTS: usize = 50;

/// Draw one set of operands for `difficulty`. Subtraction never goes negative.
fn draw<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, Operation, u32) {
    let max = difficulty.max_operand;
    let addition = !difficulty.allow_subtraction || rng.gen_bool(0.5);

    if addition {
        let a = rng.gen_range(1..max);
        let b = rng.gen_range(1..max);
        (a, Operation::Addition, b)
    } else {
        let a = rng.gen_range(1..max);
        let b = rng.gen_range(0..a);
        (a, Operation::Subtraction, b)
    }
}

/// Generate a problem for `level`, avoiding ids in `exclude` when possible.
///
/// After [`MAX_ATTEMPTS`] draws that all land in `exclude`, the last draw is
/// returned anyway.
pub fn generate_with<R: Rng>(rng: &mut R, level: u32, exclude: &HashSet<String>) -> Problem {
    let difficulty = Difficulty::for_level(level);

    let mut drawn = draw(rng, difficulty);
    let mut attempts = 1;
    while attempts < MAX_ATTEMPTS
        && exclude.contains(&helpers::question_id(drawn.0, drawn.1, drawn.2))
    {
        drawn = draw(rng, difficulty);
        attempts += 1;
    }

    let (a, op, b) = drawn;
    if attempts == MAX_ATTEMPTS && exclude.contains(&helpers::question_id(a, op, b)) {
        log::debug!("level {level}: no fresh question after {MAX_ATTEMPTS} attempts, repeating {a} {op} {b}");
    }

    helpers::problem(rng, a, op, b)
}

/// Entry point: builds the RNG from the request seed (or entropy).
pub fn generate_problem(request: ProblemRequest, exclude: &HashSet<String>) -> Problem {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with(&mut rng, request.level, exclude)
}
