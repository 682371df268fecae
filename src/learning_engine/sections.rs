use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    /// Read-aloud vocabulary cards.
    Flashcard,
    /// Multiple-choice arithmetic.
    Quiz,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Flashcard => write!(f, "flashcard"),
            SectionKind::Quiz      => write!(f, "quiz"),
        }
    }
}

/// Static description of one learning activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub kind: SectionKind,
    pub total_levels: u32,
    /// Words or problems per level.
    pub items_per_level: u32,
    pub enabled: bool,
}

pub const FRENCH: &str = "french";
pub const MATH: &str = "math";

pub fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig {
            id: FRENCH.to_string(),
            title: "Français".to_string(),
            subtitle: "Les 100 mots les plus courants".to_string(),
            description: "Apprends les mots français de base".to_string(),
            kind: SectionKind::Flashcard,
            total_levels: 10,
            items_per_level: 10,
            enabled: true,
        },
        SectionConfig {
            id: MATH.to_string(),
            title: "Mathématiques".to_string(),
            subtitle: "Addition et soustraction".to_string(),
            description: "Pratique les calculs mentaux".to_string(),
            kind: SectionKind::Quiz,
            total_levels: 4,
            items_per_level: 10,
            enabled: true,
        },
    ]
}

pub fn enabled_sections(catalog: &[SectionConfig]) -> impl Iterator<Item = &SectionConfig> {
    catalog.iter().filter(|s| s.enabled)
}

pub fn find_section<'a>(catalog: &'a [SectionConfig], id: &str) -> Option<&'a SectionConfig> {
    catalog.iter().find(|s| s.id == id)
}

pub fn max_stars(section: &SectionConfig) -> u32 {
    section.total_levels * 3
}
