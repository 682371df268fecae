//! # french_flashcards
//!
//! The engine behind a children's learning app: French vocabulary
//! flashcards and small arithmetic quizzes, with levels, star ratings,
//! daily streaks and saved progress.
//!
//! Rendering, audio and navigation belong to the host front-end. This crate
//! produces what the front-end displays and keeps what it reports.
//!
//! ## How it works
//!
//! 1. [`segment`] breaks a word into parts, marking French sounds such as
//!    `ou` or `eau` for highlighting.
//! 2. [`generate_problem`] builds an addition or subtraction problem for a
//!    level, with four answer options, avoiding questions already asked.
//!    [`QuizRound`] strings ten of them into a level.
//! 3. [`ProgressStore`] records each finished level, awards 1–3 stars,
//!    unlocks the next level, keeps the daily streak and hands out
//!    achievements. It saves after every change through a
//!    [`KeyValueStore`].
//!
//! ## Determinism
//!
//! Every generator accepts a seed (`rng_seed: Some(u64)`) and the store
//! accepts a [`Clock`], so tests can pin both randomness and time.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashSet;
//! use french_flashcards::{
//!     generate_problem, segment, MemoryStore, ProblemRequest, ProgressStore,
//! };
//!
//! let parts = segment("maison");
//! assert!(parts.iter().any(|p| p.is_special && p.text == "ai"));
//!
//! let problem = generate_problem(ProblemRequest::seeded(3, 42), &HashSet::new());
//! assert!(problem.options.contains(&problem.answer));
//!
//! let mut store = ProgressStore::new(MemoryStore::new());
//! let stars = store.complete_level("math", 1, 9, 10, &[]);
//! assert_eq!(stars, Some(3));
//! assert!(store.is_level_unlocked("math", 2));
//! ```

pub mod clock;
pub mod learning_engine;
pub mod progress;
pub mod view_adapter;

pub use clock::Clock;
pub use learning_engine::{
    generate_problem, segment, LevelDeck, Problem, ProblemRequest, QuizRound, RoundResult,
    SectionConfig, SectionKind, WordPart,
};
pub use progress::{
    JsonFileStore, KeyValueStore, MemoryStore, Mistake, ProgressConfig, ProgressRecord,
    ProgressStore, SettingsUpdate, StorageError,
};
pub use view_adapter::{dashboard, level_map};

#[cfg(test)]
mod tests;
