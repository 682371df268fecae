//! Learner progress: levels, stars, streaks, achievements, settings.
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | Persisted record and the values derived from it |
//! | `streak`       | Daily streak arithmetic |
//! | `achievements` | Badge rules |
//! | `migration`    | Stored blob → current record |
//! | `storage`      | Key-value backends (memory, JSON files) |
//! | `store`        | `ProgressStore`, the only writer of the record |

pub mod achievements;
pub mod migration;
pub mod models;
pub mod storage;
pub mod store;
mod streak;

pub use models::{
    stars_for, Achievement, LevelResult, Mistake, ProgressRecord, ReviewItem, SectionProgress,
    SectionSummary, Settings, SettingsUpdate, Streak,
};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{ProgressConfig, ProgressStore, DEFAULT_STORAGE_KEY};
