//! Bring a stored progress blob up to the current shape.
//!
//! - Absent, unparsable or non-object input gives the defaults.
//! - Top-level fields missing from the stored blob are taken from the
//!   defaults; present fields replace them wholesale.
//! - The merged value is decoded; a decode failure also gives the defaults.
//! - The decoded record is then repaired: catalog sections missing from it
//!   are added, the version is stamped, star totals are recomputed and the
//!   longest streak is raised to at least the current one.

use serde_json::Value;

use crate::learning_engine::sections::SectionConfig;

use super::models::{ProgressRecord, SectionProgress, SCHEMA_VERSION};

pub fn migrate(raw: Option<&str>, defaults: ProgressRecord, catalog: &[SectionConfig]) -> ProgressRecord {
    let Some(raw) = raw else {
        log::debug!("No stored progress, starting fresh");
        return defaults;
    };

    let stored = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            log::warn!("Stored progress is not an object, starting fresh");
            return defaults;
        }
        Err(e) => {
            log::warn!("Stored progress is unreadable, starting fresh: {}", e);
            return defaults;
        }
    };

    let mut merged = match serde_json::to_value(&defaults) {
        Ok(Value::Object(map)) => map,
        _ => return defaults,
    };
    for (key, value) in stored {
        merged.insert(key, value);
    }

    let mut record: ProgressRecord = match serde_json::from_value(Value::Object(merged)) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("Stored progress has an invalid shape, starting fresh: {}", e);
            return defaults;
        }
    };

    repair(&mut record, catalog);
    record
}

fn repair(record: &mut ProgressRecord, catalog: &[SectionConfig]) {
    if record.version != SCHEMA_VERSION {
        log::info!("Migrating progress from version {} to {}", record.version, SCHEMA_VERSION);
        record.version = SCHEMA_VERSION.to_string();
    }

    for section in catalog {
        record
            .sections
            .entry(section.id.clone())
            .or_insert_with(|| SectionProgress::new(section.total_levels));
    }

    for section in record.sections.values_mut() {
        section.recompute_total_stars();
        section.current_level = section.current_level.max(1);
    }

    record.streak.longest = record.streak.longest.max(record.streak.current);
}
