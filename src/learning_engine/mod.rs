//! Content generation: word breakdowns, arithmetic problems, level decks.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: problems, word parts, difficulty, requests |
//! | `segmenter` | Splits a French word into plain and highlighted sound parts |
//! | `helpers`   | Question formatting and multiple-choice option building |
//! | `generator` | `generate_problem()`: level policy and duplicate avoidance |
//! | `deck`      | Fisher-Yates shuffle and per-level vocabulary decks |
//! | `round`     | One quiz level played problem by problem |
//! | `sections`  | Built-in section catalog (French words, maths) |

pub mod deck;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod round;
pub mod sections;
pub mod segmenter;

pub use deck::LevelDeck;
pub use generator::{generate_problem, generate_with};
pub use models::{Difficulty, Operation, Problem, ProblemRequest, WordPart};
pub use round::{QuizRound, RoundResult};
pub use sections::{SectionConfig, SectionKind};
pub use segmenter::segment;
