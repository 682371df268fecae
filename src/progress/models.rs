//! Persisted progress record.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::learning_engine::sections::SectionConfig;

/// Schema version stamped on every saved record.
pub const SCHEMA_VERSION: &str = "2.0";

/// Mistakes kept per level for review.
pub const MAX_MISTAKES: usize = 5;

/// Date formats accepted for `lastPracticeDate`; the second is the legacy
/// `Date.toDateString()` form.
const PRACTICE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%a %b %d %Y"];

/// Unreadable dates decode to `None` rather than failing the whole record.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(|s| {
        PRACTICE_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s.trim(), fmt).ok())
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
    #[serde(default, deserialize_with = "lenient_date")]
    pub last_practice_date: Option<NaiveDate>,
}

fn text_of(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(text_of(&raw).unwrap_or_default())
}

fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(text_of(&raw))
}

/// Mistake lists written by older front-ends hold bare strings or loosely
/// typed objects. Bare values become the prompt; entries with no usable
/// text are dropped instead of failing the whole record.
fn lenient_mistakes<'de, D>(deserializer: D) -> Result<Vec<Mistake>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = raw else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            serde_json::Value::Object(_) => serde_json::from_value(entry).ok(),
            other => text_of(&other).map(|prompt| Mistake { prompt, ..Mistake::default() }),
        })
        .collect())
}

/// One wrong answer kept for later review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mistake {
    #[serde(deserialize_with = "lenient_text")]
    pub prompt: String,
    #[serde(deserialize_with = "lenient_text")]
    pub expected: String,
    #[serde(deserialize_with = "lenient_opt_text")]
    pub given: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelResult {
    pub completed: bool,
    pub stars: u8,
    pub score: u32,
    pub total_possible: u32,
    pub last_played: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_mistakes")]
    pub mistakes: Vec<Mistake>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgress {
    pub total_levels: u32,
    /// In completion order, without duplicates.
    #[serde(default)]
    pub completed_levels: Vec<u32>,
    pub current_level: u32,
    #[serde(default)]
    pub total_stars: u32,
    #[serde(default)]
    pub levels_data: BTreeMap<u32, LevelResult>,
}

impl SectionProgress {
    pub fn new(total_levels: u32) -> Self {
        Self {
            total_levels,
            completed_levels: Vec::new(),
            current_level: 1,
            total_stars: 0,
            levels_data: BTreeMap::new(),
        }
    }

    /// Sum of the stars currently recorded per level.
    pub fn recompute_total_stars(&mut self) {
        self.total_stars = self.levels_data.values().map(|l| u32::from(l.stars)).sum();
    }

    pub fn has_perfect_level(&self) -> bool {
        self.levels_data.values().any(|l| l.stars == 3)
    }

    pub fn is_finished(&self) -> bool {
        self.completed_levels.len() as u32 == self.total_levels
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub is_upper_case: bool,
    pub selected_voice: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { is_upper_case: true, selected_voice: None }
    }
}

/// Partial settings; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub is_upper_case: Option<bool>,
    /// `Some(None)` clears the voice.
    pub selected_voice: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub version: String,
    pub last_visit: DateTime<Utc>,
    pub streak: Streak,
    pub sections: BTreeMap<String, SectionProgress>,
    pub achievements: BTreeSet<String>,
    pub settings: Settings,
}

impl ProgressRecord {
    /// Fresh record with one empty section per catalog entry.
    pub fn new(catalog: &[SectionConfig], now: DateTime<Utc>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            last_visit: now,
            streak: Streak::default(),
            sections: catalog
                .iter()
                .map(|s| (s.id.clone(), SectionProgress::new(s.total_levels)))
                .collect(),
            achievements: BTreeSet::new(),
            settings: Settings::default(),
        }
    }
}

/// Display data for an unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// A level with mistakes worth revisiting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub level: u32,
    pub mistakes: Vec<Mistake>,
    pub last_played: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    pub current_level: u32,
    pub total_levels: u32,
    pub completed_levels: u32,
    pub total_stars: u32,
    pub max_stars: u32,
    pub percentage: f64,
}

impl From<&SectionProgress> for SectionSummary {
    fn from(section: &SectionProgress) -> Self {
        let completed = section.completed_levels.len() as u32;
        let percentage = if section.total_levels == 0 {
            0.0
        } else {
            f64::from(completed) / f64::from(section.total_levels) * 100.0
        };
        Self {
            current_level: section.current_level,
            total_levels: section.total_levels,
            completed_levels: completed,
            total_stars: section.total_stars,
            max_stars: section.total_levels * 3,
            percentage,
        }
    }
}

/// Stars for a score: 3 at 90 % or more, 2 at 70 % or more, else 1.
///
/// With nothing possible, any positive score counts as full marks and a
/// zero score as none.
pub fn stars_for(score: u32, total_possible: u32) -> u8 {
    let scaled = u64::from(score) * 100;
    let total = u64::from(total_possible);
    if total == 0 {
        if score > 0 { 3 } else { 1 }
    } else if scaled >= 90 * total {
        3
    } else if scaled >= 70 * total {
        2
    } else {
        1
    }
}
