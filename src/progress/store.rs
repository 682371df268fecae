//! The progress store: every read and write of a learner's progress.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::learning_engine::sections::{default_sections, SectionConfig};

use super::achievements;
use super::migration::migrate;
use super::models::*;
use super::storage::{KeyValueStore, Result as StorageResult};

pub const DEFAULT_STORAGE_KEY: &str = "flashcard_progress";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressConfig {
    pub storage_key: String,
    pub sections: Vec<SectionConfig>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            sections: default_sections(),
        }
    }
}

/// Owns the progress record and saves it after every change.
///
/// Storage failures never reach the caller: a bad read starts from
/// defaults and a failed write is logged while the in-memory record stays
/// authoritative, so the next successful save catches up.
pub struct ProgressStore<S: KeyValueStore> {
    storage: S,
    clock: Clock,
    config: ProgressConfig,
    data: ProgressRecord,
    unlocked: Vec<Achievement>,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Load with the built-in catalog and the system clock.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, Clock::System, ProgressConfig::default())
    }

    pub fn with_config(storage: S, clock: Clock, config: ProgressConfig) -> Self {
        let mut store = Self {
            data: ProgressRecord::new(&config.sections, clock.now()),
            storage,
            clock,
            config,
            unlocked: Vec::new(),
        };
        store.data = store.load();
        store
    }

    fn defaults(&self) -> ProgressRecord {
        ProgressRecord::new(&self.config.sections, self.clock.now())
    }

    fn load(&self) -> ProgressRecord {
        let raw = match self.storage.get(&self.config.storage_key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to read progress, starting fresh: {}", e);
                None
            }
        };
        migrate(raw.as_deref(), self.defaults(), &self.config.sections)
    }

    fn persist(&mut self) -> StorageResult<()> {
        let json = serde_json::to_string(&self.data)?;
        self.storage.set(&self.config.storage_key, &json)
    }

    fn save(&mut self) {
        if let Err(e) = self.persist() {
            log::error!("Failed to save progress: {}", e);
        }
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ===== Levels =====

    /// Record a finished level and return the stars earned.
    ///
    /// Returns `None` for an unknown section.
    pub fn complete_level(
        &mut self,
        section_id: &str,
        level: u32,
        score: u32,
        total_possible: u32,
        mistakes: &[Mistake],
    ) -> Option<u8> {
        let stars = stars_for(score, total_possible);
        let now = self.clock.now();

        let Some(section) = self.data.sections.get_mut(section_id) else {
            log::warn!("complete_level: unknown section {:?}", section_id);
            return None;
        };

        section.levels_data.insert(
            level,
            LevelResult {
                completed: true,
                stars,
                score,
                total_possible,
                last_played: now,
                mistakes: mistakes.iter().take(MAX_MISTAKES).cloned().collect(),
            },
        );

        if !section.completed_levels.contains(&level) {
            section.completed_levels.push(level);
        }

        section.recompute_total_stars();

        if level == section.current_level && level < section.total_levels {
            section.current_level = level + 1;
            log::info!("{}: level {} unlocked", section_id, section.current_level);
        }

        self.data.last_visit = now;
        self.update_streak();
        self.save();

        let earned = self.check_achievements(section_id);
        self.unlocked.extend(earned);

        Some(stars)
    }

    pub fn get_level_data(&self, section_id: &str, level: u32) -> Option<&LevelResult> {
        self.data.sections.get(section_id)?.levels_data.get(&level)
    }

    pub fn is_level_unlocked(&self, section_id: &str, level: u32) -> bool {
        self.data
            .sections
            .get(section_id)
            .is_some_and(|s| level <= s.current_level)
    }

    /// Levels with at least one recorded mistake, in level order.
    pub fn get_review_items(&self, section_id: &str) -> Vec<ReviewItem> {
        let Some(section) = self.data.sections.get(section_id) else {
            return Vec::new();
        };
        section
            .levels_data
            .iter()
            .filter(|(_, data)| !data.mistakes.is_empty())
            .map(|(level, data)| ReviewItem {
                level: *level,
                mistakes: data.mistakes.clone(),
                last_played: data.last_played,
            })
            .collect()
    }

    pub fn get_section_progress(&self, section_id: &str) -> Option<SectionSummary> {
        self.data.sections.get(section_id).map(SectionSummary::from)
    }

    // ===== Streak =====

    /// Count today as a practice day and save when the streak changed.
    pub fn update_streak(&mut self) {
        let today = self.clock.today();
        if self.data.streak.record_practice(today) {
            log::debug!("Streak now {} (longest {})", self.data.streak.current, self.data.streak.longest);
            self.save();
        }
    }

    pub fn get_streak(&self) -> &Streak {
        &self.data.streak
    }

    // ===== Achievements =====

    /// Unlock and return any achievements newly earned in `section_id`.
    pub fn check_achievements(&mut self, section_id: &str) -> Vec<Achievement> {
        let Some(section) = self.data.sections.get(section_id) else {
            return Vec::new();
        };
        let earned = achievements::newly_earned(
            section_id,
            section,
            &self.data.streak,
            &self.data.achievements,
        );

        for achievement in &earned {
            log::info!("Achievement unlocked: {}", achievement.id);
            self.data.achievements.insert(achievement.id.clone());
        }
        if !earned.is_empty() {
            self.save();
        }
        earned
    }

    /// Achievements unlocked by `complete_level` since the last call.
    pub fn take_unlocked_achievements(&mut self) -> Vec<Achievement> {
        std::mem::take(&mut self.unlocked)
    }

    // ===== Settings =====

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        if let Some(upper) = update.is_upper_case {
            self.data.settings.is_upper_case = upper;
        }
        if let Some(voice) = update.selected_voice {
            self.data.settings.selected_voice = voice;
        }
        self.save();
    }

    pub fn get_settings(&self) -> &Settings {
        &self.data.settings
    }

    // ===== Whole record =====

    /// Reset one section, or everything when `section_id` is `None`.
    pub fn reset_progress(&mut self, section_id: Option<&str>) {
        let defaults = self.defaults();
        match section_id {
            Some(id) => match defaults.sections.get(id) {
                Some(fresh) => {
                    self.data.sections.insert(id.to_string(), fresh.clone());
                }
                None => {
                    log::warn!("reset_progress: unknown section {:?}", id);
                    return;
                }
            },
            None => {
                self.data = defaults;
                self.unlocked.clear();
            }
        }
        self.save();
    }

    pub fn get_all_data(&self) -> &ProgressRecord {
        &self.data
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }
}
