//! Shared builders for arithmetic problems.
//!
//! The generator draws operands, then hands off to these helpers to format
//! the question and to build the multiple-choice options around the answer.

use rand::Rng;
use crate::learning_engine::{
    deck::shuffle,
    models::{Operation, Problem},
};

/// Number of multiple-choice options, the answer included.
pub const OPTION_COUNT: usize = 4;

/// Largest distance between the answer and a distractor.
pub const MAX_DISTRACTOR_OFFSET: u32 = 5;

/// Canonical question id, e.g. `"4 + 3"`.
pub fn question_id(a: u32, op: Operation, b: u32) -> String {
    format!("{a} {op} {b}")
}

/// Four distinct non-negative options including `answer`, shuffled.
///
/// Distractors sit within `MAX_DISTRACTOR_OFFSET` of the answer; values
/// below zero clamp to zero. The loop always ends because the five values
/// above the answer are always available.
pub fn options<R: Rng>(rng: &mut R, answer: u32) -> Vec<u32> {
    let mut opts = Vec::with_capacity(OPTION_COUNT);
    opts.push(answer);

    while opts.len() < OPTION_COUNT {
        let offset = rng.gen_range(1..=MAX_DISTRACTOR_OFFSET);
        let distractor = if rng.gen_bool(0.5) {
            answer + offset
        } else {
            answer.saturating_sub(offset)
        };
        if !opts.contains(&distractor) {
            opts.push(distractor);
        }
    }

    shuffle(rng, &mut opts);
    opts
}

/// Assemble the final [`Problem`].
pub fn problem<R: Rng>(rng: &mut R, a: u32, op: Operation, b: u32) -> Problem {
    let id = question_id(a, op, b);
    let answer = op.apply(a, b);
    Problem {
        question: format!("{id} = ?"),
        id,
        answer,
        options: options(rng, answer),
    }
}
