//! Crate-level behaviour tests.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Segmenter | Parts rebuild the word; highlight only sound patterns |
//! | Generator | Answer matches the question; four distinct options; no negative results; bounded retries |
//! | Stars | 90 % / 70 % thresholds; replaying a level replaces its stars |
//! | Levels | Unlocking moves forward one level at a time |
//! | Streak | Same day, next day and gap behaviour through the store |
//! | Persistence | Saved after each change; corrupt or missing blobs start fresh; reload keeps state |
//! | Reset | One section or the whole record |

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::Clock;
use crate::learning_engine::{
    generate_with,
    segmenter::{EXCEPTIONS, SPECIAL_SOUNDS},
    segment,
};
use crate::progress::{JsonFileStore, MemoryStore, ProgressConfig, ProgressStore, DEFAULT_STORAGE_KEY};

// ── helpers ──────────────────────────────────────────────────────────────────

fn noon() -> Clock {
    // 2026-06-15T12:00:00Z
    Clock::fixed(DateTime::<Utc>::from_timestamp(1_781_524_800, 0).unwrap())
}

fn store() -> ProgressStore<MemoryStore> {
    ProgressStore::with_config(MemoryStore::new(), noon(), ProgressConfig::default())
}

/// Evaluate `"a + b"` / `"a - b"`.
fn eval(id: &str) -> u32 {
    let parts: Vec<&str> = id.split(' ').collect();
    assert_eq!(parts.len(), 3, "malformed id {id:?}");
    let a: u32 = parts[0].parse().unwrap();
    let b: u32 = parts[2].parse().unwrap();
    match parts[1] {
        "+" => a + b,
        "-" => {
            assert!(b <= a, "negative subtraction {id}");
            a - b
        }
        op => panic!("unknown operator {op}"),
    }
}

const WORDS: [&str; 12] = [
    "bonjour", "maison", "COMME", "bateau", "Sommeil", "pain", "oiseau", "bien", "été", "année",
    "", "Ümlaut-on",
];

// ── segmenter ────────────────────────────────────────────────────────────────

#[test]
fn segments_rebuild_the_word() {
    for word in WORDS {
        let rebuilt: String = segment(word).iter().map(|p| p.text.as_str()).collect();
        assert_eq!(rebuilt, word);
    }
}

#[test]
fn only_sound_patterns_are_special() {
    for word in WORDS {
        for part in segment(word) {
            let lower = part.text.to_lowercase();
            let expected = SPECIAL_SOUNDS.contains(&lower.as_str()) && !EXCEPTIONS.contains(&lower.as_str());
            assert_eq!(part.is_special, expected, "{word}: part {:?}", part.text);
        }
    }
}

#[test]
fn no_part_is_empty() {
    for word in WORDS {
        assert!(segment(word).iter().all(|p| !p.text.is_empty()), "{word}");
    }
}

// ── generator ────────────────────────────────────────────────────────────────

#[test]
fn answers_match_questions_for_all_levels() {
    let mut rng = StdRng::seed_from_u64(2024);
    for level in 1u32..=5 {
        for _ in 0..1000 {
            let p = generate_with(&mut rng, level, &HashSet::new());
            assert_eq!(p.answer, eval(&p.id), "level {level}: {}", p.id);
            assert_eq!(p.question, format!("{} = ?", p.id));
            assert!(p.options.contains(&p.answer));
            assert_eq!(p.options.len(), 4);
            let distinct: HashSet<u32> = p.options.iter().copied().collect();
            assert_eq!(distinct.len(), 4, "duplicate options {:?}", p.options);
        }
    }
}

#[test]
fn subtraction_appears_from_level_three() {
    let mut rng = StdRng::seed_from_u64(7);
    for level in [3u32, 4, 6] {
        let subtractions = (0..200)
            .map(|_| generate_with(&mut rng, level, &HashSet::new()))
            .filter(|p| p.id.contains(" - "))
            .count();
        assert!(subtractions > 0, "level {level} never subtracted");
    }
}

#[test]
fn growing_exclude_set_avoids_repeats() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut asked = HashSet::new();
    for _ in 0..10 {
        let p = generate_with(&mut rng, 4, &asked);
        assert!(asked.insert(p.id.clone()), "repeated {}", p.id);
    }
}

// ── stars ────────────────────────────────────────────────────────────────────

#[test]
fn star_thresholds_through_the_store() {
    let mut s = store();
    assert_eq!(s.complete_level("french", 1, 9, 10, &[]), Some(3));
    assert_eq!(s.complete_level("french", 1, 7, 10, &[]), Some(2));
    assert_eq!(s.complete_level("french", 1, 5, 10, &[]), Some(1));
}

#[test]
fn total_stars_use_latest_result_per_level() {
    let mut s = store();
    s.complete_level("french", 1, 10, 10, &[]);
    s.complete_level("french", 2, 7, 10, &[]);
    assert_eq!(s.get_all_data().sections["french"].total_stars, 5);

    // Replaying level 1 with a weaker score lowers the total.
    s.complete_level("french", 1, 5, 10, &[]);
    let french = &s.get_all_data().sections["french"];
    assert_eq!(french.total_stars, 3);
    assert_eq!(french.completed_levels, vec![1, 2]);
}

// ── levels ───────────────────────────────────────────────────────────────────

#[test]
fn completing_current_level_unlocks_next_only_once() {
    let mut s = store();
    assert!(s.is_level_unlocked("french", 1));
    assert!(!s.is_level_unlocked("french", 2));

    s.complete_level("french", 1, 9, 10, &[]);
    assert_eq!(s.get_all_data().sections["french"].current_level, 2);
    assert!(s.is_level_unlocked("french", 2));

    s.complete_level("french", 1, 9, 10, &[]);
    assert_eq!(s.get_all_data().sections["french"].current_level, 2);
}

#[test]
fn completing_a_locked_level_does_not_skip_ahead() {
    let mut s = store();
    s.complete_level("math", 3, 10, 10, &[]);
    assert_eq!(s.get_all_data().sections["math"].current_level, 1);
}

// ── streak ───────────────────────────────────────────────────────────────────

#[test]
fn streak_same_day_next_day_and_gap() {
    let mut s = store();
    s.update_streak();
    s.update_streak();
    assert_eq!(s.get_streak().current, 1);

    s.clock_mut().advance(Duration::days(1));
    s.update_streak();
    assert_eq!(s.get_streak().current, 2);

    s.clock_mut().advance(Duration::days(1));
    s.update_streak();
    assert_eq!((s.get_streak().current, s.get_streak().longest), (3, 3));

    s.clock_mut().advance(Duration::days(2));
    s.update_streak();
    assert_eq!((s.get_streak().current, s.get_streak().longest), (1, 3));
}

// ── persistence ──────────────────────────────────────────────────────────────

#[test]
fn missing_or_corrupt_blob_starts_fresh() {
    for raw in [None, Some("{ not json"), Some("null"), Some(r#"{"sections": 3}"#)] {
        let storage = match raw {
            Some(raw) => MemoryStore::with_entry(DEFAULT_STORAGE_KEY, raw),
            None => MemoryStore::new(),
        };
        let s = ProgressStore::with_config(storage, noon(), ProgressConfig::default());
        let data = s.get_all_data();
        assert_eq!(data.streak.current, 0, "input {raw:?}");
        assert_eq!(data.sections["french"].current_level, 1);
        assert_eq!(data.sections["math"].total_levels, 4);
        assert!(data.achievements.is_empty());
    }
}

#[test]
fn every_change_is_saved_and_reloads() {
    let mut s = store();
    s.complete_level("math", 1, 8, 10, &[]);
    let saved = s.storage().clone();

    let reloaded = ProgressStore::with_config(saved, noon(), ProgressConfig::default());
    assert_eq!(reloaded.get_all_data(), s.get_all_data());
    assert_eq!(reloaded.get_level_data("math", 1).map(|l| l.stars), Some(2));
}

#[test]
fn file_backed_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let storage = JsonFileStore::new(dir.path().to_path_buf()).unwrap();
        let mut s = ProgressStore::with_config(storage, noon(), ProgressConfig::default());
        s.complete_level("french", 1, 10, 10, &[]);
    }
    let storage = JsonFileStore::new(dir.path().to_path_buf()).unwrap();
    let s = ProgressStore::with_config(storage, noon(), ProgressConfig::default());
    assert_eq!(s.get_all_data().sections["french"].current_level, 2);
    assert!(s.get_all_data().achievements.contains("french_first_level"));
    assert_eq!(s.get_streak().current, 1);
}

#[test]
fn achievements_are_never_emitted_twice() {
    let mut s = store();
    s.complete_level("math", 1, 10, 10, &[]);
    assert!(!s.take_unlocked_achievements().is_empty());
    s.complete_level("math", 1, 10, 10, &[]);
    assert!(s.take_unlocked_achievements().is_empty());
    assert!(s.check_achievements("math").is_empty());
}

// ── reset ────────────────────────────────────────────────────────────────────

#[test]
fn reset_one_section_keeps_the_rest() {
    let mut s = store();
    s.complete_level("math", 1, 10, 10, &[]);
    s.complete_level("french", 1, 10, 10, &[]);

    s.reset_progress(Some("math"));
    let data = s.get_all_data();
    assert_eq!(data.sections["math"].current_level, 1);
    assert!(data.sections["math"].levels_data.is_empty());
    assert_eq!(data.sections["french"].current_level, 2);
    assert_eq!(data.streak.current, 1);
}

#[test]
fn reset_everything() {
    let mut s = store();
    s.complete_level("french", 1, 10, 10, &[]);
    s.reset_progress(None);

    let reloaded = ProgressStore::with_config(s.storage().clone(), noon(), ProgressConfig::default());
    let data = reloaded.get_all_data();
    assert_eq!(data.streak.current, 0);
    assert!(data.achievements.is_empty());
    assert_eq!(data.sections["french"].total_stars, 0);
}
