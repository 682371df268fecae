//! End-to-end tour of the engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Word breakdown**: a few French words split into plain and
//!    highlighted sound parts (highlighted parts shown in brackets).
//! 2. **Quiz level**: a seeded maths round played to the end, answering
//!    one problem wrong first so a mistake is recorded.
//! 3. **Progress**: the round result fed to the store, then the level map
//!    and dashboard view models the front-end would render.
//!
//! Set `RUST_LOG=info` to see unlocks and achievements as they happen.

use french_flashcards::{
    dashboard, level_map, segment, Clock, MemoryStore, ProgressConfig, ProgressStore, QuizRound,
};

fn print_word(word: &str) {
    let rendered: String = segment(word)
        .iter()
        .map(|p| if p.is_special { format!("[{}]", p.text) } else { p.text.clone() })
        .collect();
    println!("  {word:<10} → {rendered}");
}

fn main() {
    env_logger::init();

    println!("━━ Word breakdown ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for word in ["bonjour", "maison", "bateau", "comme", "oiseau", "bien"] {
        print_word(word);
    }
    println!();

    println!("━━ Maths, level 3 ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut round = QuizRound::new(3, 10, Some(42));
    let result = loop {
        let problem = round.problem().clone();
        if round.step() == 0 {
            if let Some(wrong) = problem.options.iter().find(|o| **o != problem.answer) {
                round.submit(*wrong);
                println!("  {:<12} {:?}  ✗ {wrong}", problem.question, problem.options);
            }
        }
        round.submit(problem.answer);
        println!("  {:<12} {:?}  ✓ {}", problem.question, problem.options, problem.answer);
        if let Some(result) = round.advance() {
            break result;
        }
    };
    println!("  Score: {}/{}", result.score, result.total_possible);
    println!();

    println!("━━ Progress ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut store = ProgressStore::with_config(MemoryStore::new(), Clock::System, ProgressConfig::default());
    for level in 1..=2 {
        let stars = store.complete_level("math", level, result.score, result.total_possible, &result.mistakes);
        println!("  math level {level}: {} star(s)", stars.unwrap_or(0));
    }
    for achievement in store.take_unlocked_achievements() {
        println!("  🏆 {} - {}", achievement.title, achievement.description);
    }
    for item in store.get_review_items("math") {
        println!("  review level {}: {} mistake(s)", item.level, item.mistakes.len());
    }
    println!();

    let data = store.get_all_data();
    match serde_json::to_string_pretty(&level_map(data, "math")) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("level map: {e}"),
    }
    match serde_json::to_string_pretty(&dashboard(data, &store.config().sections)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("dashboard: {e}"),
    }
}
