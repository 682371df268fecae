//! One arithmetic level played problem by problem.

use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use crate::learning_engine::{generator::generate_with, models::Problem};
use crate::progress::models::Mistake;

/// Problems per level when the section does not say otherwise.
pub const PROBLEMS_PER_LEVEL: u32 = 10;

/// Outcome of a finished round, ready for `ProgressStore::complete_level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub level: u32,
    pub score: u32,
    pub total_possible: u32,
    pub mistakes: Vec<Mistake>,
}

pub struct QuizRound {
    rng: StdRng,
    level: u32,
    total: u32,
    index: u32,
    score: u32,
    asked: HashSet<String>,
    current: Problem,
    solved: bool,
    mistakes: Vec<Mistake>,
}

impl QuizRound {
    pub fn new(level: u32, total: u32, rng_seed: Option<u64>) -> Self {
        let mut rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let asked = HashSet::new();
        let current = generate_with(&mut rng, level, &asked);
        QuizRound {
            rng,
            level,
            total: total.max(1),
            index: 0,
            score: 0,
            asked,
            current,
            solved: false,
            mistakes: Vec::new(),
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.current
    }

    /// Zero-based position of the current problem.
    pub fn step(&self) -> u32 {
        self.index
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Check `choice` against the current problem.
    ///
    /// Wrong answers are recorded and may be retried. The problem scores
    /// once it is answered correctly, on any try.
    pub fn submit(&mut self, choice: u32) -> bool {
        if self.solved {
            return true;
        }
        if self.current.is_correct(choice) {
            self.solved = true;
            self.score += 1;
            true
        } else {
            self.mistakes.push(Mistake {
                prompt: self.current.question.clone(),
                expected: self.current.answer.to_string(),
                given: Some(choice.to_string()),
            });
            false
        }
    }

    /// Move past a solved problem.
    ///
    /// Returns `None` while problems remain (or the current one is unsolved)
    /// and the final result after the last problem.
    pub fn advance(&mut self) -> Option<RoundResult> {
        if !self.solved {
            return None;
        }
        if self.index + 1 >= self.total {
            return Some(RoundResult {
                level: self.level,
                score: self.score,
                total_possible: self.total,
                mistakes: self.mistakes.clone(),
            });
        }
        self.asked.insert(self.current.id.clone());
        self.index += 1;
        self.current = generate_with(&mut self.rng, self.level, &self.asked);
        self.solved = false;
        None
    }
}
