use serde_json::{json, Value};

use crate::learning_engine::sections::{enabled_sections, max_stars, SectionConfig};
use crate::progress::models::{ProgressRecord, SectionProgress};

/// Which side of the winding path a level node sits on.
fn side(level: u32) -> &'static str {
    if level % 2 == 0 { "right" } else { "left" }
}

/// One node of the level map.
fn level_node(section: &SectionProgress, level: u32) -> Value {
    let data = section.levels_data.get(&level);
    json!({
        "level": level,
        "unlocked": level <= section.current_level,
        "completed": data.is_some_and(|d| d.completed),
        "current": level == section.current_level,
        "stars": data.map_or(0, |d| d.stars),
        "side": side(level),
    })
}

/// Level map for `section_id`: one node per level, first to last.
///
/// Returns `Value::Null` for an unknown section.
pub fn level_map(record: &ProgressRecord, section_id: &str) -> Value {
    let Some(section) = record.sections.get(section_id) else {
        return Value::Null;
    };
    let nodes: Vec<Value> = (1..=section.total_levels)
        .map(|level| level_node(section, level))
        .collect();
    json!({
        "section": section_id,
        "currentLevel": section.current_level,
        "totalLevels": section.total_levels,
        "levels": nodes,
    })
}

/// Card for one section on the home screen.
fn section_card(config: &SectionConfig, progress: Option<&SectionProgress>) -> Value {
    let completed = progress.map_or(0, |p| p.completed_levels.len() as u32);
    let total_stars = progress.map_or(0, |p| p.total_stars);
    let percentage = if config.total_levels == 0 {
        0.0
    } else {
        f64::from(completed) / f64::from(config.total_levels) * 100.0
    };
    json!({
        "id": config.id,
        "title": config.title,
        "subtitle": config.subtitle,
        "kind": config.kind,
        "completedLevels": completed,
        "totalLevels": config.total_levels,
        "totalStars": total_stars,
        "maxStars": max_stars(config),
        "percentage": percentage,
        "finished": completed == config.total_levels,
    })
}

/// Home screen: streak plus one card per enabled section.
pub fn dashboard(record: &ProgressRecord, catalog: &[SectionConfig]) -> Value {
    let cards: Vec<Value> = enabled_sections(catalog)
        .map(|s| section_card(s, record.sections.get(&s.id)))
        .collect();
    json!({
        "streak": {
            "current": record.streak.current,
            "longest": record.streak.longest,
            "active": record.streak.current > 0,
        },
        "sections": cards,
    })
}
