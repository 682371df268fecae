use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Arithmetic primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    pub fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            Operation::Addition    => a + b,
            Operation::Subtraction => a - b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition    => write!(f, "+"),
            Operation::Subtraction => write!(f, "-"),
        }
    }
}

/// Operand bound and allowed operations for one quiz level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Operands are drawn from `1..max_operand`.
    pub max_operand: u32,
    pub allow_subtraction: bool,
}

impl Difficulty {
    pub fn for_level(level: u32) -> Self {
        let (max_operand, allow_subtraction) = match level {
            2          => (12, false),
            3          => (8, true),
            l if l >= 4 => (20, true),
            _          => (10, false),
        };
        Difficulty { max_operand, allow_subtraction }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub level: u32,
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Unseeded request for `level`.
    pub fn new(level: u32) -> Self {
        Self { level, rng_seed: None }
    }

    pub fn seeded(level: u32, seed: u64) -> Self {
        Self { level, rng_seed: Some(seed) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Canonical form, e.g. `"7 - 3"`. Used for duplicate avoidance.
    pub id: String,
    /// Display form, e.g. `"7 - 3 = ?"`.
    pub question: String,
    pub answer: u32,
    /// Four distinct values, one of which is `answer`, in random order.
    pub options: Vec<u32>,
}

impl Problem {
    pub fn is_correct(&self, choice: u32) -> bool {
        choice == self.answer
    }
}

// ---------------------------------------------------------------------------
// Word breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPart {
    pub text: String,
    pub is_special: bool,
    pub id: usize,
}
