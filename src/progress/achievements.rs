use std::collections::BTreeSet;

use super::models::{Achievement, SectionProgress, Streak};

/// Streak length that earns the streak badge.
pub const STREAK_GOAL: u32 = 7;

pub const STREAK_ID: &str = "streak_7";

pub fn first_level_id(section: &str) -> String {
    format!("{section}_first_level")
}

pub fn perfect_id(section: &str) -> String {
    format!("{section}_perfect")
}

pub fn complete_id(section: &str) -> String {
    format!("{section}_complete")
}

/// Achievements earned by the current state but not yet in `unlocked`.
pub fn newly_earned(
    section_id: &str,
    section: &SectionProgress,
    streak: &Streak,
    unlocked: &BTreeSet<String>,
) -> Vec<Achievement> {
    let mut earned = Vec::new();
    let mut consider = |id: String, title: &str, description: String, condition: bool| {
        if condition && !unlocked.contains(&id) {
            earned.push(Achievement { id, title: title.to_string(), description });
        }
    };

    consider(
        first_level_id(section_id),
        "Premier Pas",
        "Complète ton premier niveau!".to_string(),
        section.completed_levels.len() == 1,
    );
    consider(
        perfect_id(section_id),
        "Parfait!",
        "Obtiens 3 étoiles dans un niveau!".to_string(),
        section.has_perfect_level(),
    );
    consider(
        complete_id(section_id),
        "Expert",
        format!("Complète tous les niveaux de {section_id}!"),
        section.is_finished(),
    );
    consider(
        STREAK_ID.to_string(),
        "Série de 7",
        "Pratique pendant 7 jours consécutifs!".to_string(),
        streak.current >= STREAK_GOAL,
    );

    earned
}
